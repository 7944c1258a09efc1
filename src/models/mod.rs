//! Domain models shared across the engine.

pub mod station;
pub mod telemetry;

pub use station::{Identity, Station};
pub use telemetry::{DailyRecord, DateRange, Sample, DATE_FORMAT, TIMESTAMP_FORMAT};
