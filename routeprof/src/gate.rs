//! Per-request instrumentation gate
//!
//! The host's dispatch hook calls [`RequestGate::decide`] once per inbound
//! request, before any route handler runs. The gate only reads the scope
//! tree resolved at load time: no merge work, no allocation, no I/O on the
//! request path, and no error case — an unknown route is a pass-through.

use std::collections::HashMap;
use std::fmt;

use crate::config::ResolvedConfig;
use crate::domain::RoutePath;

/// What the host pipeline should do with a request.
///
/// `Instrument` is a signal to the host (or an external collector), not an
/// action this crate performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Instrument,
    PassThrough,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Instrument => write!(f, "instrument"),
            Decision::PassThrough => write!(f, "pass-through"),
        }
    }
}

/// Read-only view of the resolved scope tree, keyed by route path.
#[derive(Debug)]
pub struct RequestGate {
    routes: HashMap<RoutePath, ResolvedConfig>,
}

impl RequestGate {
    pub(crate) fn new(routes: HashMap<RoutePath, ResolvedConfig>) -> Self {
        Self { routes }
    }

    /// Decide whether profiling is active for `route`.
    ///
    /// Tries an exact match first, then walks up the `/`-delimited
    /// ancestor prefixes so a request under an enabled scope (for example
    /// `/admin/users` under `/admin`) inherits that scope's decision. The
    /// nearest declared scope wins even when it is disabled. The walk
    /// slices the input in place; nothing is allocated.
    pub fn decide(&self, route: &str) -> Decision {
        let mut cursor = route.trim_end_matches('/');
        if cursor.is_empty() {
            if route.is_empty() {
                return Decision::PassThrough;
            }
            cursor = "/";
        }

        loop {
            if let Some(node) = self.routes.get(cursor) {
                return if node.enabled { Decision::Instrument } else { Decision::PassThrough };
            }
            match RoutePath::parent_of(cursor) {
                Some(parent) => cursor = parent,
                None => return Decision::PassThrough,
            }
        }
    }

    /// Exact lookup of a declared scope's resolved settings.
    pub fn resolved(&self, route: &str) -> Option<&ResolvedConfig> {
        self.routes.get(route)
    }

    /// Number of declared scopes in the resolved tree.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IntervalMs;
    use std::path::PathBuf;

    fn node(enabled: bool) -> ResolvedConfig {
        ResolvedConfig { enabled, interval: IntervalMs(60_000), directory: PathBuf::new() }
    }

    fn gate(entries: &[(&str, bool)]) -> RequestGate {
        let routes = entries
            .iter()
            .map(|(path, enabled)| (RoutePath::new(*path), node(*enabled)))
            .collect();
        RequestGate::new(routes)
    }

    #[test]
    fn test_enabled_route_instruments() {
        let gate = gate(&[("/", false), ("/admin", true)]);
        assert_eq!(gate.decide("/admin"), Decision::Instrument);
    }

    #[test]
    fn test_disabled_route_passes_through() {
        let gate = gate(&[("/", false), ("/admin", true)]);
        assert_eq!(gate.decide("/dashboard"), Decision::PassThrough);
    }

    #[test]
    fn test_request_under_enabled_scope_instruments() {
        let gate = gate(&[("/", false), ("/admin", true)]);
        assert_eq!(gate.decide("/admin/users"), Decision::Instrument);
        assert_eq!(gate.decide("/admin/users/42"), Decision::Instrument);
    }

    #[test]
    fn test_nearest_scope_wins_even_when_disabled() {
        let gate = gate(&[("/", true), ("/internal", false)]);
        assert_eq!(gate.decide("/internal/health"), Decision::PassThrough);
        assert_eq!(gate.decide("/public"), Decision::Instrument);
    }

    #[test]
    fn test_unknown_route_never_errors() {
        let gate = gate(&[]);
        assert_eq!(gate.decide("/anything"), Decision::PassThrough);
        assert_eq!(gate.decide(""), Decision::PassThrough);
        assert_eq!(gate.decide("///"), Decision::PassThrough);
    }

    #[test]
    fn test_trailing_slash_matches_scope() {
        let gate = gate(&[("/admin", true)]);
        assert_eq!(gate.decide("/admin/"), Decision::Instrument);
    }
}
