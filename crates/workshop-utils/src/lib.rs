//! Shared utilities for workshop-rs
//!
//! Currently this is the logging setup shared by the workshop binaries.

pub mod logging;

pub use logging::{init_tracing, init_tracing_json};
