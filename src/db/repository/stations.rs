//! Station directory repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::Station;

/// Read access to the station directory.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// List every station in store-defined order.
    ///
    /// The order must be stable across calls; accessible-station results
    /// and dataset ordering are derived from it.
    async fn list_stations(&self) -> RepositoryResult<Vec<Station>>;

    /// Look up a single station by id.
    ///
    /// # Returns
    /// * `Ok(Some(Station))` - The matching directory entry
    /// * `Ok(None)` - The id is unknown (not a fault)
    /// * `Err(RepositoryError)` - Store-level failure
    async fn find_station(&self, station_id: &str) -> RepositoryResult<Option<Station>>;
}
