//! Navigation model
//!
//! Rebuilt on every render from the static config plus the live favorites
//! count.

use crate::config::NavConfig;
use crate::icon::IconId;
use serde::Serialize;

/// One entry of the primary navigation, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub label: String,
    pub path: String,
    pub icon: IconId,
    /// Live count for the favorites entry; `None` for every other entry
    pub badge_count: Option<u32>,
}

/// Build the ordered entry list. Pure; no side effects.
pub fn build_navigation(config: &NavConfig, favorites_count: u32) -> Vec<NavigationEntry> {
    config
        .items
        .iter()
        .map(|item| NavigationEntry {
            label: item.label.clone(),
            path: item.path.clone(),
            icon: item.icon.clone(),
            badge_count: item.favorites.then_some(favorites_count),
        })
        .collect()
}
