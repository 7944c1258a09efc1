//! Chart assembly: walks the date range per accessible station, feeds the
//! telemetry through the segment and bucket aggregators, and wraps the
//! labelled datasets with chart metadata.
//!
//! Per-day fetches for a station run concurrently with a bounded fan-out;
//! `buffered` yields the results in submission order, so the per-day
//! records arrive already joined chronologically and the aggregators see
//! monotonic input without any re-sort.

use futures::stream::{self, StreamExt};
use log::debug;

use super::access::{accessible_stations, AccessibleStation};
use super::buckets::{average_buckets, count_buckets, Bucket};
use super::segments::extract_segments;
use crate::db::repository::{FullRepository, RepositoryResult, TelemetryRepository};
use crate::models::{DailyRecord, DateRange, Identity};
use crate::routes::charts::{
    ChartData, ChartDataset, ChartSpec, DataPoint, BRIGHTNESS_COURSE, BROADCAST_TIMES,
    TEMPERATURE_COURSE, UPLOAD_ACTIVITY,
};

/// Upper bound on in-flight per-day record fetches for one station.
const FETCH_CONCURRENCY: usize = 8;

/// Leading characters of the station id used as a short code in labels.
const STATION_ACRONYM_LENGTH: usize = 2;

/// Bar chart of contiguous broadcast windows per station.
///
/// A station contributes a dataset whenever at least one segment exists;
/// stations with fewer than two uploads across the range are left out.
pub async fn broadcast_times(
    repo: &dyn FullRepository,
    identity: &Identity,
    range: DateRange,
) -> RepositoryResult<ChartData> {
    let mut chart = ChartData::new(&BROADCAST_TIMES);
    for station in accessible_stations(repo, identity).await? {
        let records = fetch_station_days(repo, &station.id, range).await?;
        let timestamps: Vec<_> = records
            .iter()
            .flat_map(|record| record.samples.iter().map(|sample| sample.timestamp))
            .collect();

        let segments = extract_segments(&timestamps);
        if segments.is_empty() {
            continue;
        }
        chart.datasets.push(ChartDataset {
            station_name: station_label(&station),
            values: segments
                .into_iter()
                .map(|segment| DataPoint::range(segment.start, segment.end))
                .collect(),
        });
    }
    Ok(chart)
}

/// Line chart of average temperature per 15-minute bucket.
pub async fn temperature_course(
    repo: &dyn FullRepository,
    identity: &Identity,
    range: DateRange,
) -> RepositoryResult<ChartData> {
    line_chart(repo, identity, range, &TEMPERATURE_COURSE, |record| {
        let samples: Vec<_> = record
            .samples
            .iter()
            .map(|sample| (sample.timestamp, sample.temperature))
            .collect();
        average_buckets(record.date, &samples)
    })
    .await
}

/// Line chart of average image brightness per 15-minute bucket.
pub async fn brightness_course(
    repo: &dyn FullRepository,
    identity: &Identity,
    range: DateRange,
) -> RepositoryResult<ChartData> {
    line_chart(repo, identity, range, &BRIGHTNESS_COURSE, |record| {
        let samples: Vec<_> = record
            .samples
            .iter()
            .map(|sample| (sample.timestamp, sample.brightness))
            .collect();
        average_buckets(record.date, &samples)
    })
    .await
}

/// Line chart of uploaded images per hour.
pub async fn images_per_hour(
    repo: &dyn FullRepository,
    identity: &Identity,
    range: DateRange,
) -> RepositoryResult<ChartData> {
    line_chart(repo, identity, range, &UPLOAD_ACTIVITY, |record| {
        count_buckets(record.date, &record.timestamps())
    })
    .await
}

/// Shared line-chart walk.
///
/// Each present day contributes one full bucket grid; the grids are
/// concatenated end-to-end across the range rather than merged. Datasets
/// whose every bucket is zero are suppressed - they render as visual noise
/// on the dashboard.
async fn line_chart<F>(
    repo: &dyn FullRepository,
    identity: &Identity,
    range: DateRange,
    spec: &ChartSpec,
    per_day: F,
) -> RepositoryResult<ChartData>
where
    F: Fn(&DailyRecord) -> Vec<Bucket>,
{
    let mut chart = ChartData::new(spec);
    for station in accessible_stations(repo, identity).await? {
        let records = fetch_station_days(repo, &station.id, range).await?;
        let buckets: Vec<Bucket> = records.iter().flat_map(|record| per_day(record)).collect();

        if buckets.iter().all(|bucket| bucket.value == 0.0) {
            debug!(
                "suppressing all-zero dataset for station {} in '{}'",
                station.id, spec.title
            );
            continue;
        }
        chart.datasets.push(ChartDataset {
            station_name: station_label(&station),
            values: buckets
                .into_iter()
                .map(|bucket| DataPoint::value(bucket.label, bucket.value))
                .collect(),
        });
    }
    Ok(chart)
}

/// Fetch a station's records for every date in the range, in chronological
/// order. Absent days are normal telemetry gaps and contribute nothing.
async fn fetch_station_days(
    repo: &dyn FullRepository,
    station_id: &str,
    range: DateRange,
) -> RepositoryResult<Vec<DailyRecord>> {
    let fetched: Vec<_> = stream::iter(range.iter())
        .map(|date| repo.fetch_daily_record(station_id, date))
        .buffered(FETCH_CONCURRENCY)
        .collect()
        .await;

    let mut records = Vec::with_capacity(fetched.len());
    for result in fetched {
        if let Some(record) = result? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Display label: station name plus a short station-code suffix.
fn station_label(station: &AccessibleStation) -> String {
    let acronym = station
        .id
        .get(..STATION_ACRONYM_LENGTH)
        .unwrap_or(&station.id);
    format!("{} ({})", station.name, acronym)
}
