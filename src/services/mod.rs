//! Service layer: the aggregation engine behind the chart endpoints.
//!
//! The engine is stateless and read-only per invocation. Each chart request
//! resolves the caller's accessible stations, walks the requested date
//! range, feeds the raw telemetry through the segment or bucket
//! aggregators, and assembles labelled datasets.

pub mod access;

pub mod buckets;

pub mod charts;

pub mod segments;

#[cfg(test)]
#[path = "segments_tests.rs"]
mod segments_tests;



pub use access::{accessible_stations, AccessibleStation};
pub use buckets::{average_buckets, count_buckets, Bucket};
pub use charts::{brightness_course, broadcast_times, images_per_hour, temperature_course};
pub use segments::{extract_segments, Segment};
