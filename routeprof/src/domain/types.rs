//! Domain types providing compile-time safety and self-documentation
//!
//! These newtype wrappers keep millisecond intervals and route paths from
//! being confused with plain integers and strings in function signatures.

use std::borrow::Borrow;
use std::fmt;
use std::time::Duration;

/// Sampling interval in milliseconds
///
/// Configuration directives express intervals as positive integer
/// milliseconds; this wrapper carries that unit through to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntervalMs(pub u64);

impl IntervalMs {
    /// Convert to a [`std::time::Duration`] for the reactor timer
    pub fn to_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl fmt::Display for IntervalMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Route path identifying a scope in the host's routing hierarchy
///
/// Scope paths are `/`-delimited prefixes (`/`, `/admin`, `/admin/users`).
/// A child scope's path is its parent's path plus one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(String);

impl RoutePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the route path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of path segments (`/` is depth 0, `/admin/users` is depth 2)
    pub fn depth(&self) -> usize {
        self.0.split('/').filter(|s| !s.is_empty()).count()
    }

    /// The parent prefix of `route`, or `None` for the root scope.
    ///
    /// Pure slicing on the input, no allocation. Trailing slashes are
    /// ignored: `/admin/` and `/admin` share the parent `/`.
    pub fn parent_of(route: &str) -> Option<&str> {
        let trimmed = route.trim_end_matches('/');
        let idx = trimmed.rfind('/')?;
        if idx == 0 {
            (trimmed.len() > 1).then_some("/")
        } else {
            Some(&trimmed[..idx])
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Lets a HashMap keyed by RoutePath be queried with the bare &str the
// host hands to the gate, without allocating a key.
impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_display() {
        assert_eq!(IntervalMs(30_000).to_string(), "30000ms");
    }

    #[test]
    fn test_interval_to_duration() {
        assert_eq!(IntervalMs(1500).to_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_route_depth() {
        assert_eq!(RoutePath::new("/").depth(), 0);
        assert_eq!(RoutePath::new("/admin").depth(), 1);
        assert_eq!(RoutePath::new("/admin/users").depth(), 2);
    }

    #[test]
    fn test_parent_of_walks_to_root() {
        assert_eq!(RoutePath::parent_of("/admin/users"), Some("/admin"));
        assert_eq!(RoutePath::parent_of("/admin"), Some("/"));
        assert_eq!(RoutePath::parent_of("/"), None);
    }

    #[test]
    fn test_parent_of_ignores_trailing_slash() {
        assert_eq!(RoutePath::parent_of("/admin/users/"), Some("/admin"));
        assert_eq!(RoutePath::parent_of("/admin/"), Some("/"));
    }
}
