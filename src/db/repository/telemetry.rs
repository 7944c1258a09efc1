//! Telemetry record repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::models::DailyRecord;

/// Read access to per-day telemetry records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    /// Fetch one station's telemetry for one calendar date.
    ///
    /// Absent records are normal gaps in telemetry and come back as
    /// `Ok(None)`, never as an error.
    ///
    /// # Returns
    /// * `Ok(Some(DailyRecord))` - The day's chronologically ordered samples
    /// * `Ok(None)` - No uploads on that date
    /// * `Err(RepositoryError)` - Store-level failure
    async fn fetch_daily_record(
        &self,
        station_id: &str,
        date: NaiveDate,
    ) -> RepositoryResult<Option<DailyRecord>>;
}
