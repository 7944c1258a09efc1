//! # Sundial Stats Backend
//!
//! Time-series aggregation engine for the sundial station monitoring dashboard.
//!
//! Stations upload webcam images at irregular intervals together with paired
//! sensor readings (temperature, brightness). This crate turns those raw
//! per-day telemetry logs into fixed-shape chart payloads: bar charts of
//! contiguous broadcast windows and line charts of bucketed averages or
//! upload counts, scoped by the caller's station visibility.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for chart responses
//! - [`models`]: Station directory, caller identity, and telemetry records
//! - [`db`]: Repository traits and storage backends
//! - [`services`]: The aggregation engine (access resolution, segment
//!   extraction, interval bucketing, chart assembly)
//! - [`routes`]: Chart DTO definitions and request-parameter validation
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
