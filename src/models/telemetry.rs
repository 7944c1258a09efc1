//! Raw telemetry records and calendar-date ranges.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Wire format for calendar dates (`2024-06-01`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for timestamps (`2024-06-01 08:15:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One uploaded image and its paired sensor readings.
///
/// The readings travel with the timestamp as a single tuple so that the
/// pairing can never drift the way separately stored parallel arrays can.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub brightness: f64,
}

impl Sample {
    pub fn new(timestamp: NaiveDateTime, temperature: f64, brightness: f64) -> Self {
        Self {
            timestamp,
            temperature,
            brightness,
        }
    }
}

/// One day of chronologically ordered telemetry for one station.
///
/// Samples are appended in upload order by the ingestion path, so the
/// timestamp sequence is non-decreasing. The aggregation engine relies on
/// that invariant and never re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub station_id: String,
    pub date: NaiveDate,
    pub samples: Vec<Sample>,
}

impl DailyRecord {
    pub fn new(station_id: impl Into<String>, date: NaiveDate, samples: Vec<Sample>) -> Self {
        Self {
            station_id: station_id.into(),
            date,
            samples,
        }
    }

    /// Upload timestamps in record order.
    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.samples.iter().map(|sample| sample.timestamp).collect()
    }
}

/// Inclusive range of calendar dates, iterated forward one day at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build an inclusive range. Returns `None` when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// Range collapsing to a single date.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of dates covered, start and end included.
    pub fn num_days(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }

    /// Iterate every date in the range in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = Box<dyn Iterator<Item = NaiveDate>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_range_iteration_forward() {
        let range = DateRange::new(date("2024-06-01"), date("2024-06-03")).unwrap();
        let days: Vec<NaiveDate> = range.iter().collect();
        assert_eq!(
            days,
            vec![date("2024-06-01"), date("2024-06-02"), date("2024-06-03")]
        );
        assert_eq!(range.num_days(), 3);
    }

    #[test]
    fn test_single_date_collapses_to_one_iteration() {
        let range = DateRange::single(date("2024-06-01"));
        assert_eq!(range.iter().count(), 1);
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(DateRange::new(date("2024-06-02"), date("2024-06-01")).is_none());
    }

    #[test]
    fn test_range_crosses_month_boundary() {
        let range = DateRange::new(date("2024-06-29"), date("2024-07-02")).unwrap();
        assert_eq!(range.num_days(), 4);
        assert_eq!(range.iter().last(), Some(date("2024-07-02")));
    }
}
