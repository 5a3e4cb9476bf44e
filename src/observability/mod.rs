//! Observability module
//!
//! Structured logging for the calculator front end.

pub mod telemetry;
