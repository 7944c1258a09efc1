//! Route-level DTO definitions and request validation.

pub mod charts;
pub mod validation;
