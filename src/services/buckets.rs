//! Fixed-width time bucketing for line charts.
//!
//! A day's irregular samples are mapped onto a fixed grid of bucket labels
//! spanning `[dayStart, dayStart + 24h]` inclusive. The index computation
//! shifts the grid origin back by half an interval so that a sample falling
//! exactly on a boundary is assigned to the nearest bucket label instead of
//! always rounding down. Dropping that offset would shift every bucket by
//! half a slot.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Bucket width for averaged sensor metrics (minutes).
pub const AVERAGE_INTERVAL_MIN: i64 = 15;

/// Bucket width for upload counts (minutes).
pub const COUNT_INTERVAL_MIN: i64 = 60;

/// One fixed-width slot of a line chart grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub label: NaiveDateTime,
    pub value: f64,
}

/// Half-interval shift that centers the grid on its labels.
fn grid_offset(interval: Duration) -> Duration {
    interval / 2
}

/// Empty grid of zero-valued buckets spanning the full day, endpoints
/// included.
fn empty_grid(date: NaiveDate, interval: Duration) -> Vec<Bucket> {
    let day_start = date.and_time(NaiveTime::MIN);
    let day_end = day_start + Duration::hours(24);
    let mut grid = Vec::new();
    let mut label = day_start;
    while label <= day_end {
        grid.push(Bucket { label, value: 0.0 });
        label += interval;
    }
    grid
}

/// Index of the bucket whose label is nearest to `timestamp`.
fn bucket_index(
    day_start: NaiveDateTime,
    interval: Duration,
    timestamp: NaiveDateTime,
) -> Option<usize> {
    let origin = day_start - grid_offset(interval);
    let elapsed = (timestamp - origin).num_seconds();
    if elapsed < 0 {
        return None;
    }
    Some((elapsed / interval.num_seconds()) as usize)
}

/// 15-minute grid holding the arithmetic mean of the values mapped into
/// each slot. Slots with no samples stay at `0`.
///
/// Pure function of its input: identical samples always produce an
/// identical grid.
pub fn average_buckets(date: NaiveDate, samples: &[(NaiveDateTime, f64)]) -> Vec<Bucket> {
    let interval = Duration::minutes(AVERAGE_INTERVAL_MIN);
    let mut grid = empty_grid(date, interval);
    let day_start = date.and_time(NaiveTime::MIN);

    let mut sums = vec![0.0; grid.len()];
    let mut counts = vec![0usize; grid.len()];
    for &(timestamp, value) in samples {
        let Some(index) = bucket_index(day_start, interval, timestamp) else {
            continue;
        };
        if index >= grid.len() {
            continue;
        }
        sums[index] += value;
        counts[index] += 1;
    }

    for (index, bucket) in grid.iter_mut().enumerate() {
        if counts[index] > 0 {
            bucket.value = sums[index] / counts[index] as f64;
        }
    }
    grid
}

/// Hourly grid counting the samples mapped into each slot.
pub fn count_buckets(date: NaiveDate, timestamps: &[NaiveDateTime]) -> Vec<Bucket> {
    let interval = Duration::minutes(COUNT_INTERVAL_MIN);
    let mut grid = empty_grid(date, interval);
    let day_start = date.and_time(NaiveTime::MIN);

    for &timestamp in timestamps {
        let Some(index) = bucket_index(day_start, interval, timestamp) else {
            continue;
        };
        if let Some(bucket) = grid.get_mut(index) {
            bucket.value += 1.0;
        }
    }
    grid
}
