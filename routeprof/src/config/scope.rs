//! Per-scope configuration records and the inheritance merge
//!
//! A scope declares at most three settings: an enable flag, a sampling
//! interval, and an output directory. Unset fields inherit from the
//! nearest ancestor scope; the root inherits hard-coded defaults.
//! [`merge`] is pure — directory provisioning happens in a separate pass
//! over the resolved tree (see [`crate::config::loader`]).

use std::path::{Path, PathBuf};

use crate::domain::IntervalMs;

/// Interval applied when no scope in the chain sets one.
pub const DEFAULT_INTERVAL: IntervalMs = IntervalMs(60_000);

/// Settings as declared at one scope. `None` means "unset here, inherit".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeConfig {
    pub enabled: Option<bool>,
    pub interval: Option<IntervalMs>,
    pub directory: Option<PathBuf>,
}

/// Settings after inheritance has been applied.
///
/// Immutable and shared read-only once the load phase completes. An empty
/// `directory` means no output is configured for the scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub enabled: bool,
    pub interval: IntervalMs,
    pub directory: PathBuf,
}

impl ResolvedConfig {
    /// The values the root scope inherits when it leaves fields unset.
    pub fn root_defaults() -> Self {
        Self { enabled: false, interval: DEFAULT_INTERVAL, directory: PathBuf::new() }
    }

    /// The configured output directory, or `None` if the path is empty.
    pub fn output_directory(&self) -> Option<&Path> {
        if self.directory.as_os_str().is_empty() {
            None
        } else {
            Some(&self.directory)
        }
    }
}

/// Merge one scope's declared settings with its parent's resolved ones.
///
/// Per field: an explicitly-set child value always wins; an unset field
/// takes the parent's resolved value. Pure and idempotent — resolving the
/// same inputs twice yields the same node.
pub fn merge(declared: &ScopeConfig, parent: &ResolvedConfig) -> ResolvedConfig {
    ResolvedConfig {
        enabled: declared.enabled.unwrap_or(parent.enabled),
        interval: declared.interval.unwrap_or(parent.interval),
        directory: declared.directory.clone().unwrap_or_else(|| parent.directory.clone()),
    }
}
