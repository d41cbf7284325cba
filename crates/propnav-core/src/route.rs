//! Route matcher
//!
//! Exact string comparison only: no prefix matching, no trailing-slash or
//! query normalization. A path that matches no entry simply leaves every
//! entry inactive.

use crate::model::NavigationEntry;

/// Current route as supplied by the host router. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteContext {
    pub current_path: String,
}

impl RouteContext {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
        }
    }
}

pub fn is_active(entry: &NavigationEntry, route: &RouteContext) -> bool {
    entry.path == route.current_path
}

/// The active entry, if any. Unique paths guarantee at most one match.
pub fn active_entry<'a>(
    entries: &'a [NavigationEntry],
    route: &RouteContext,
) -> Option<&'a NavigationEntry> {
    entries.iter().find(|entry| is_active(entry, route))
}
