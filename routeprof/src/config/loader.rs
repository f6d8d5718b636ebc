//! Configuration load phase
//!
//! Turns a flat list of scope directives into the runtime artifacts:
//! a [`RequestGate`] over the resolved scope tree and, when any scope
//! enables profiling, a process-global [`SamplingPlan`].
//!
//! The phase runs in four passes, in order:
//!
//! 1. **Parse** — validate directive values, build the declared scopes.
//! 2. **Resolve** — pure inheritance merge, parents before children.
//! 3. **Provision** — ensure each enabled scope's output directory exists.
//! 4. **Plan** — pick the single process-wide sampling interval.
//!
//! Everything here runs synchronously before the reactor serves requests
//! or fires timers, so the filesystem work in pass 3 is allowed to block.
//! Any failure aborts the load for the whole process.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

use crate::domain::{ConfigError, IntervalMs, RoutePath};
use crate::gate::RequestGate;
use crate::provision::ensure_directory;

use super::scope::{merge, ResolvedConfig, ScopeConfig};

/// One scope directive as the host configuration delivers it.
///
/// Omitted fields are unset and inherit from the nearest ancestor scope.
#[derive(Debug, Clone, Deserialize)]
pub struct ScopeDirective {
    /// Route path the settings attach to (`/`, `/admin`, ...)
    pub scope: String,
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Sampling period in milliseconds; must be positive when present
    #[serde(default)]
    pub interval_ms: Option<u64>,
    /// Output directory; empty string means "no output configured"
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// The process-global sampling decision produced by the load phase.
///
/// Sampling is per process even though enablement is per route: the plan
/// carries the interval (and output directory) of the first scope, in
/// resolution order, that enabled profiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingPlan {
    /// The scope whose resolved settings drive the global timer
    pub scope: RoutePath,
    pub interval: IntervalMs,
    pub directory: Option<PathBuf>,
}

/// Everything the host needs after a successful load.
#[derive(Debug)]
pub struct LoadedConfig {
    pub gate: RequestGate,
    /// `None` when no scope enabled profiling; the timer is never armed
    pub sampling: Option<SamplingPlan>,
}

/// Run the full load phase over `directives`.
///
/// # Errors
///
/// Any [`ConfigError`] is fatal for the load: malformed directive values,
/// duplicate scopes, directory provisioning failures, or enabled scopes
/// that resolve to conflicting sampling intervals.
pub fn load(directives: Vec<ScopeDirective>) -> Result<LoadedConfig, ConfigError> {
    let mut scopes: Vec<(RoutePath, ScopeConfig)> = Vec::with_capacity(directives.len());
    for directive in directives {
        let (path, declared) = parse_directive(directive)?;
        if scopes.iter().any(|(existing, _)| *existing == path) {
            return Err(ConfigError::DuplicateScope(path.to_string()));
        }
        scopes.push((path, declared));
    }

    // Parents must resolve before children. A parent scope is a strict
    // prefix with fewer segments, so a stable sort by depth gives a valid
    // topological order while preserving declaration order within a depth.
    scopes.sort_by_key(|(path, _)| path.depth());

    let mut resolved: HashMap<RoutePath, ResolvedConfig> = HashMap::with_capacity(scopes.len());
    let mut order: Vec<RoutePath> = Vec::with_capacity(scopes.len());
    for (path, declared) in scopes {
        let parent = nearest_ancestor(&resolved, path.as_str())
            .cloned()
            .unwrap_or_else(ResolvedConfig::root_defaults);
        resolved.insert(path.clone(), merge(&declared, &parent));
        order.push(path);
    }

    // Provisioning is a separate pass so the resolve pass above stays pure.
    for path in &order {
        let node = &resolved[path];
        if !node.enabled {
            continue;
        }
        match node.output_directory() {
            Some(dir) => ensure_directory(dir)?,
            None => warn!(
                "scope \"{path}\" enables profiling but configures no output \
                 directory; samples will not be persisted"
            ),
        }
    }

    let sampling = sampling_plan(&resolved, &order)?;

    Ok(LoadedConfig { gate: RequestGate::new(resolved), sampling })
}

fn parse_directive(directive: ScopeDirective) -> Result<(RoutePath, ScopeConfig), ConfigError> {
    if !directive.scope.starts_with('/') {
        return Err(ConfigError::InvalidScope(directive.scope));
    }
    let path = RoutePath::new(normalize(&directive.scope));

    let interval = match directive.interval_ms {
        Some(0) => return Err(ConfigError::InvalidInterval { scope: path.to_string() }),
        other => other.map(IntervalMs),
    };

    let declared =
        ScopeConfig { enabled: directive.enabled, interval, directory: directive.directory };
    Ok((path, declared))
}

/// Strip trailing slashes so `/admin/` and `/admin` name the same scope.
fn normalize(scope: &str) -> &str {
    let trimmed = scope.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Nearest declared ancestor of `path` that has already been resolved.
fn nearest_ancestor<'a>(
    resolved: &'a HashMap<RoutePath, ResolvedConfig>,
    path: &str,
) -> Option<&'a ResolvedConfig> {
    let mut cursor = path;
    while let Some(parent) = RoutePath::parent_of(cursor) {
        if let Some(node) = resolved.get(parent) {
            return Some(node);
        }
        cursor = parent;
    }
    None
}

/// Pick the process-global sampling interval from the enabled scopes.
///
/// The first enabled scope in resolution order seeds the plan; any other
/// enabled scope resolving a *different* interval is a validation error
/// rather than a silent tie-break, since only one timer exists.
fn sampling_plan(
    resolved: &HashMap<RoutePath, ResolvedConfig>,
    order: &[RoutePath],
) -> Result<Option<SamplingPlan>, ConfigError> {
    let mut plan: Option<SamplingPlan> = None;
    for path in order {
        let node = &resolved[path];
        if !node.enabled {
            continue;
        }
        match &plan {
            None => {
                plan = Some(SamplingPlan {
                    scope: path.clone(),
                    interval: node.interval,
                    directory: node.output_directory().map(Path::to_path_buf),
                });
            }
            Some(existing) if existing.interval != node.interval => {
                return Err(ConfigError::ConflictingIntervals {
                    first_scope: existing.scope.to_string(),
                    first: existing.interval,
                    other_scope: path.to_string(),
                    other: node.interval,
                });
            }
            Some(_) => {}
        }
    }

    if let Some(ref plan) = plan {
        info!("sampling enabled: every {} (from scope \"{}\")", plan.interval, plan.scope);
    }
    Ok(plan)
}
