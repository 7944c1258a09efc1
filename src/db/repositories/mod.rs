//! Repository implementations module.
//!
//! This module contains the implementations of the repository traits:
//! - `local`: In-memory implementation for unit testing and local development
//!
//! A table-storage or SQL backend plugs in here by implementing
//! [`crate::db::repository::StationRepository`] and
//! [`crate::db::repository::TelemetryRepository`].

#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
