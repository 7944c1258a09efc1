//! Station visibility resolution for a caller identity.

use log::debug;

use crate::db::repository::{FullRepository, RepositoryResult, StationRepository};
use crate::models::Identity;

/// A station the caller may chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleStation {
    pub id: String,
    pub name: String,
}

/// Resolve the stations visible to `identity`, in store order.
///
/// Privilege `0` sees every named station; any other privilege sees only
/// the assigned station. An unknown or unnamed assigned station yields an
/// empty list, never an error: callers treat "nothing accessible" as
/// "nothing to chart".
pub async fn accessible_stations(
    repo: &dyn FullRepository,
    identity: &Identity,
) -> RepositoryResult<Vec<AccessibleStation>> {
    if identity.is_global() {
        let stations = repo.list_stations().await?;
        return Ok(stations
            .into_iter()
            .filter_map(|station| {
                station.name.map(|name| AccessibleStation {
                    id: station.id,
                    name,
                })
            })
            .collect());
    }

    let Some(station_id) = identity.station_id.as_deref() else {
        debug!("restricted identity without station claim, nothing accessible");
        return Ok(Vec::new());
    };

    let station = repo.find_station(station_id).await?;
    Ok(station
        .and_then(|station| {
            station.name.map(|name| AccessibleStation {
                id: station.id,
                name,
            })
        })
        .into_iter()
        .collect())
}
