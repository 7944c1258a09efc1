//! Station directory entries and caller identity.

use serde::{Deserialize, Serialize};

/// A sundial station as stored in the station directory.
///
/// Only stations with a display name are visible to the dashboard;
/// unnamed entries are provisioning placeholders and are never charted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station identifier (directory row key).
    pub id: String,
    /// Display name. `None` marks a station that is not yet published.
    pub name: Option<String>,
    /// Human-readable location, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Offset from UTC in minutes, as reported by the station.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

impl Station {
    /// Create a directory entry with just an id and an optional name.
    pub fn new(id: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_string),
            location: None,
            latitude: None,
            longitude: None,
            utc_offset_minutes: None,
        }
    }
}

/// Validated caller identity, supplied by the upstream token gateway.
///
/// Privilege `0` grants visibility over every station; any other value
/// restricts the caller to the station named in `station_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub privilege: i32,
    /// Station the caller is bound to when `privilege != 0`.
    pub station_id: Option<String>,
}

impl Identity {
    /// Identity that may query every station.
    pub fn global() -> Self {
        Self {
            privilege: 0,
            station_id: None,
        }
    }

    /// Identity restricted to a single station.
    pub fn for_station(privilege: i32, station_id: impl Into<String>) -> Self {
        Self {
            privilege,
            station_id: Some(station_id.into()),
        }
    }

    pub fn is_global(&self) -> bool {
        self.privilege == 0
    }
}
