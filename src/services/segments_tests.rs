#[cfg(test)]
mod tests {
    use crate::services::segments::{extract_segments, Segment};
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn segment(start: &str, end: &str) -> Segment {
        Segment {
            start: ts(start),
            end: ts(end),
        }
    }

    #[test]
    fn test_dense_uploads_form_one_segment() {
        let timestamps = vec![
            ts("2024-06-01 08:00:00"),
            ts("2024-06-01 08:05:00"),
            ts("2024-06-01 08:09:00"),
        ];
        let segments = extract_segments(&timestamps);
        assert_eq!(
            segments,
            vec![segment("2024-06-01 08:00:00", "2024-06-01 08:09:00")]
        );
    }

    #[test]
    fn test_idle_gap_splits_segments() {
        let timestamps = vec![
            ts("2024-06-01 08:00:00"),
            ts("2024-06-01 08:05:00"),
            ts("2024-06-01 08:30:00"),
            ts("2024-06-01 08:35:00"),
        ];
        let segments = extract_segments(&timestamps);
        assert_eq!(
            segments,
            vec![
                segment("2024-06-01 08:00:00", "2024-06-01 08:05:00"),
                segment("2024-06-01 08:30:00", "2024-06-01 08:35:00"),
            ]
        );
    }

    #[test]
    fn test_single_timestamp_yields_no_segment() {
        let segments = extract_segments(&[ts("2024-06-01 08:00:00")]);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_empty_input_yields_no_segment() {
        assert!(extract_segments(&[]).is_empty());
    }

    #[test]
    fn test_exact_fifteen_minute_gap_does_not_split() {
        // The idle threshold is strict: exactly 15 minutes stays contiguous.
        let timestamps = vec![
            ts("2024-06-01 08:00:00"),
            ts("2024-06-01 08:15:00"),
            ts("2024-06-01 08:30:00"),
        ];
        let segments = extract_segments(&timestamps);
        assert_eq!(
            segments,
            vec![segment("2024-06-01 08:00:00", "2024-06-01 08:30:00")]
        );
    }

    #[test]
    fn test_gap_just_over_threshold_splits() {
        // 15 minutes and one second is already idle; sub-minute precision
        // must not be truncated away.
        let timestamps = vec![
            ts("2024-06-01 08:00:00"),
            ts("2024-06-01 08:15:01"),
            ts("2024-06-01 08:20:00"),
        ];
        let segments = extract_segments(&timestamps);
        assert_eq!(
            segments,
            vec![segment("2024-06-01 08:15:01", "2024-06-01 08:20:00")]
        );
    }

    #[test]
    fn test_leading_isolated_point_is_suppressed() {
        // The first point sits alone before a long gap: no zero-length
        // segment is emitted for it, and the next segment starts after the
        // gap rather than stretching back to 07:00 across an hour of idle.
        let timestamps = vec![
            ts("2024-06-01 07:00:00"),
            ts("2024-06-01 08:00:00"),
            ts("2024-06-01 08:05:00"),
        ];
        let segments = extract_segments(&timestamps);
        assert_eq!(
            segments,
            vec![segment("2024-06-01 08:00:00", "2024-06-01 08:05:00")]
        );
    }

    #[test]
    fn test_trailing_isolated_point_still_closes_chart() {
        // The tail segment is emitted unconditionally, even when degenerate.
        let timestamps = vec![
            ts("2024-06-01 08:00:00"),
            ts("2024-06-01 08:05:00"),
            ts("2024-06-01 09:00:00"),
        ];
        let segments = extract_segments(&timestamps);
        assert_eq!(
            segments,
            vec![
                segment("2024-06-01 08:00:00", "2024-06-01 08:05:00"),
                segment("2024-06-01 09:00:00", "2024-06-01 09:00:00"),
            ]
        );
    }

    #[test]
    fn test_overnight_gap_splits_multi_day_input() {
        let timestamps = vec![
            ts("2024-06-01 17:50:00"),
            ts("2024-06-01 18:00:00"),
            ts("2024-06-02 06:00:00"),
            ts("2024-06-02 06:10:00"),
        ];
        let segments = extract_segments(&timestamps);
        assert_eq!(
            segments,
            vec![
                segment("2024-06-01 17:50:00", "2024-06-01 18:00:00"),
                segment("2024-06-02 06:00:00", "2024-06-02 06:10:00"),
            ]
        );
    }
}
