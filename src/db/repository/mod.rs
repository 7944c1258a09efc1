//! Repository trait definitions and error types.

pub mod error;
pub mod stations;
pub mod telemetry;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use stations::StationRepository;
pub use telemetry::TelemetryRepository;

/// Combined store surface consumed by the aggregation engine.
pub trait FullRepository: StationRepository + TelemetryRepository {}

impl<T: StationRepository + TelemetryRepository> FullRepository for T {}
