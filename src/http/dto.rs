//! Data Transfer Objects for the HTTP API.
//!
//! The chart payload DTOs are re-exported from the routes module since
//! they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{ChartData, ChartDataset, ChartKind, DataPoint};
use crate::services::access::AccessibleStation;

/// Query parameters shared by every chart endpoint.
///
/// Either `date` (single day) or `startDate`/`endDate` (inclusive range)
/// must be present.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChartQuery {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub store: String,
}

/// Accessible-station listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationListResponse {
    pub stations: Vec<StationInfoDto>,
    pub total: usize,
}

/// Station info DTO for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationInfoDto {
    pub station_id: String,
    pub station_name: String,
}

impl From<AccessibleStation> for StationInfoDto {
    fn from(station: AccessibleStation) -> Self {
        Self {
            station_id: station.id,
            station_name: station.name,
        }
    }
}
