//! Utility functions and helpers for server operations.
//!
//! Parsing of persisted enum names from request parameters and tracing setup.

pub mod enums;
pub mod telemetry;
