//! Hierarchical per-route configuration
//!
//! [`scope`] holds the declared/resolved records and the pure inheritance
//! merge; [`loader`] drives the load phase that resolves the scope tree,
//! provisions output directories, and produces the runtime artifacts.

pub mod loader;
pub mod scope;

pub use loader::{load, LoadedConfig, SamplingPlan, ScopeDirective};
pub use scope::{merge, ResolvedConfig, ScopeConfig, DEFAULT_INTERVAL};
