//! Logging setup shared by the back-office binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, init, init_with};
