//! Public API surface for the chart engine.
//!
//! This file consolidates the DTO types returned by the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::charts::ChartData;
pub use crate::routes::charts::ChartDataset;
pub use crate::routes::charts::ChartKind;
pub use crate::routes::charts::ChartSpec;
pub use crate::routes::charts::DataPoint;
pub use crate::routes::charts::{
    BRIGHTNESS_COURSE, BROADCAST_TIMES, TEMPERATURE_COURSE, UPLOAD_ACTIVITY,
};

pub use crate::services::access::AccessibleStation;
