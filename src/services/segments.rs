//! Contiguous broadcast-window extraction (bar chart semantics).

use chrono::NaiveDateTime;

/// Gap between consecutive uploads beyond which a station counts as idle.
/// Compared at full timestamp precision, not truncated minutes.
pub const IDLE_GAP_SECS: i64 = 15 * 60;

/// A contiguous window of broadcast activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Split a chronologically sorted timestamp sequence into contiguous
/// activity segments.
///
/// A gap longer than [`IDLE_GAP_SECS`] between consecutive uploads closes
/// the running segment. A segment that would start and end on the same
/// timestamp is suppressed instead of emitted with zero length; the
/// running start still advances past the gap, so no segment ever spans an
/// idle gap. The tail segment is always emitted. Fewer than two timestamps
/// yield no segments.
///
/// The input may span multiple days; overnight gaps close segments the
/// same way any other idle gap does.
pub fn extract_segments(timestamps: &[NaiveDateTime]) -> Vec<Segment> {
    if timestamps.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut start = timestamps[0];
    for pair in timestamps.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if (next - prev).num_seconds() > IDLE_GAP_SECS {
            if start != prev {
                segments.push(Segment { start, end: prev });
            }
            start = next;
        }
    }
    segments.push(Segment {
        start,
        end: timestamps[timestamps.len() - 1],
    });
    segments
}
