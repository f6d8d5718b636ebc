//! Domain model for routeprof
//!
//! Core domain types and errors: newtype wrappers for route paths and
//! sampling intervals, and the load-time / runtime error taxonomy.

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use types::{IntervalMs, RoutePath};

pub use errors::{ConfigError, SampleError};
