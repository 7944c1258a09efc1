//! Request-parameter validation for the chart endpoints.

use chrono::NaiveDate;

use crate::models::{DateRange, DATE_FORMAT};

/// Reason a chart request was rejected before touching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("missing date parameters: provide `date` or `startDate` and `endDate`")]
    MissingDates,
    #[error("unparseable date `{0}`: expected yyyy-MM-dd")]
    MalformedDate(String),
    #[error("startDate is after endDate")]
    InvertedRange,
}

/// Parse a `yyyy-MM-dd` date parameter.
pub fn parse_date(raw: &str) -> Result<NaiveDate, RequestError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| RequestError::MalformedDate(raw.to_string()))
}

/// Resolve the requested range from either a single `date` or a
/// `startDate`/`endDate` pair. A single date takes precedence when both
/// forms are present.
pub fn resolve_range(
    date: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<DateRange, RequestError> {
    match (date, start_date, end_date) {
        (Some(single), _, _) => Ok(DateRange::single(parse_date(single)?)),
        (None, Some(start), Some(end)) => {
            let start = parse_date(start)?;
            let end = parse_date(end)?;
            DateRange::new(start, end).ok_or(RequestError::InvertedRange)
        }
        _ => Err(RequestError::MissingDates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_date_mode() {
        let range = resolve_range(Some("2024-06-01"), None, None).unwrap();
        assert_eq!(range.start(), range.end());
        assert_eq!(range.num_days(), 1);
    }

    #[test]
    fn test_range_mode() {
        let range = resolve_range(None, Some("2024-06-01"), Some("2024-06-03")).unwrap();
        assert_eq!(range.num_days(), 3);
    }

    #[test]
    fn test_single_date_wins_when_both_forms_present() {
        let range = resolve_range(Some("2024-06-05"), Some("2024-06-01"), Some("2024-06-03"))
            .unwrap();
        assert_eq!(range.start(), parse_date("2024-06-05").unwrap());
        assert_eq!(range.num_days(), 1);
    }

    #[test]
    fn test_missing_parameters_rejected() {
        assert_eq!(
            resolve_range(None, None, None),
            Err(RequestError::MissingDates)
        );
        assert_eq!(
            resolve_range(None, Some("2024-06-01"), None),
            Err(RequestError::MissingDates)
        );
    }

    #[test]
    fn test_malformed_date_rejected() {
        assert_eq!(
            resolve_range(Some("01.06.2024"), None, None),
            Err(RequestError::MalformedDate("01.06.2024".to_string()))
        );
        assert!(matches!(
            resolve_range(None, Some("2024-13-40"), Some("2024-06-03")),
            Err(RequestError::MalformedDate(_))
        ));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(
            resolve_range(None, Some("2024-06-03"), Some("2024-06-01")),
            Err(RequestError::InvertedRange)
        );
    }
}
