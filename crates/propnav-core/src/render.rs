//! Render projection
//!
//! One pure function from (config, per-render inputs, menu state) to a
//! description of what the header shows. Hosts (the Leptos component, the
//! CLI preview, the JSON API) only draw what this returns.

use crate::badge::{badge_text, BadgeContext};
use crate::config::NavConfig;
use crate::icon::{Glyph, IconId, IconResolver};
use crate::layout::{Viewport, ViewportClass};
use crate::menu::MenuState;
use crate::model::{build_navigation, NavigationEntry};
use crate::route::{is_active, RouteContext};
use serde::Serialize;

/// Delay between consecutive mobile panel items appearing
pub const STAGGER_STEP_MS: u64 = 100;

/// External values read on every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInputs {
    pub route: RouteContext,
    pub favorites_count: u32,
    pub viewport_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandView {
    pub title: String,
    pub subtitle: Option<String>,
    pub home_path: String,
    pub glyph: Glyph,
}

/// One navigation button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub label: String,
    pub path: String,
    pub glyph: Glyph,
    pub active: bool,
    pub badge: Option<String>,
    /// Hover text, set when the label itself is not drawn
    pub tooltip: Option<String>,
    /// Staggered entry delay in the mobile panel
    pub appear_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleView {
    pub glyph: Glyph,
    pub aria_expanded: bool,
    pub aria_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "kebab-case")]
pub enum LayoutView {
    Wide {
        items: Vec<ItemView>,
    },
    Compact {
        items: Vec<ItemView>,
    },
    Mobile {
        toggle: ToggleView,
        /// Present only while the menu is open
        panel: Option<Vec<ItemView>>,
    },
}

impl LayoutView {
    pub fn class(&self) -> ViewportClass {
        match self {
            LayoutView::Wide { .. } => ViewportClass::Wide,
            LayoutView::Compact { .. } => ViewportClass::NarrowDesktop,
            LayoutView::Mobile { .. } => ViewportClass::Mobile,
        }
    }

    /// Items currently drawn (empty for a closed mobile menu)
    pub fn items(&self) -> &[ItemView] {
        match self {
            LayoutView::Wide { items } | LayoutView::Compact { items } => items.as_slice(),
            LayoutView::Mobile {
                panel: Some(items), ..
            } => items.as_slice(),
            LayoutView::Mobile { panel: None, .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkView {
    pub label: String,
    pub path: String,
    pub glyph: Option<Glyph>,
}

/// Everything the header draws for one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub brand: BrandView,
    pub layout: LayoutView,
    pub menu: MenuState,
    /// Full-viewport dismiss overlay; present iff the menu is open
    pub backdrop: bool,
    pub secondary: Option<Vec<LinkView>>,
}

impl HeaderView {
    pub fn active_item(&self) -> Option<&ItemView> {
        self.layout.items().iter().find(|item| item.active)
    }
}

fn item_view(
    entry: &NavigationEntry,
    route: &RouteContext,
    badge_context: BadgeContext,
    icons: &dyn IconResolver,
) -> ItemView {
    ItemView {
        label: entry.label.clone(),
        path: entry.path.clone(),
        glyph: icons.resolve_or_default(&entry.icon),
        active: is_active(entry, route),
        badge: entry
            .badge_count
            .and_then(|count| badge_text(count, badge_context)),
        tooltip: None,
        appear_delay_ms: None,
    }
}

/// Project the header for one render.
///
/// The viewport class and active entry are recomputed here every call; none
/// of it is cached between renders.
pub fn render_header(
    config: &NavConfig,
    inputs: &RenderInputs,
    menu: MenuState,
    icons: &dyn IconResolver,
) -> HeaderView {
    let entries = build_navigation(config, inputs.favorites_count);
    let viewport = Viewport::new(inputs.viewport_width);
    let route = &inputs.route;

    let layout = match viewport.class(&config.breakpoints) {
        ViewportClass::Wide => LayoutView::Wide {
            items: entries
                .iter()
                .map(|entry| item_view(entry, route, BadgeContext::Header, icons))
                .collect(),
        },
        ViewportClass::NarrowDesktop => LayoutView::Compact {
            items: entries
                .iter()
                .take(config.compact_limit)
                .map(|entry| ItemView {
                    tooltip: Some(entry.label.clone()),
                    ..item_view(entry, route, BadgeContext::Compact, icons)
                })
                .collect(),
        },
        ViewportClass::Mobile => {
            let toggle_icon = if menu.is_open() {
                IconId::Close
            } else {
                IconId::Menu
            };
            let toggle = ToggleView {
                glyph: icons.resolve_or_default(&toggle_icon),
                aria_expanded: menu.is_open(),
                aria_label: if menu.is_open() {
                    "Close menu"
                } else {
                    "Open menu"
                },
            };
            let panel = menu.is_open().then(|| {
                entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| ItemView {
                        appear_delay_ms: Some(index as u64 * STAGGER_STEP_MS),
                        ..item_view(entry, route, BadgeContext::Header, icons)
                    })
                    .collect()
            });
            LayoutView::Mobile { toggle, panel }
        }
    };

    let secondary = viewport
        .shows_secondary_bar(&config.breakpoints)
        .then(|| {
            config
                .secondary
                .iter()
                .map(|link| LinkView {
                    label: link.label.clone(),
                    path: link.path.clone(),
                    glyph: link.icon.as_ref().map(|icon| icons.resolve_or_default(icon)),
                })
                .collect()
        });

    HeaderView {
        brand: BrandView {
            title: config.brand.title.clone(),
            subtitle: config.brand.subtitle.clone(),
            home_path: config.brand.home_path.clone(),
            glyph: icons.resolve_or_default(&IconId::Home),
        },
        layout,
        menu,
        backdrop: menu.is_open(),
        secondary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::LucideIcons;

    fn inputs(path: &str, favorites: u32, width: u32) -> RenderInputs {
        RenderInputs {
            route: RouteContext::new(path),
            favorites_count: favorites,
            viewport_width: width,
        }
    }

    fn render(path: &str, favorites: u32, width: u32, menu: MenuState) -> HeaderView {
        render_header(
            &NavConfig::default(),
            &inputs(path, favorites, width),
            menu,
            &LucideIcons,
        )
    }

    fn favorites_badge(view: &HeaderView) -> Option<String> {
        view.layout
            .items()
            .iter()
            .find(|item| item.path == "/favorites")
            .and_then(|item| item.badge.clone())
    }

    #[test]
    fn test_wide_layout_shows_all_entries_with_labels() {
        let view = render("/", 0, 1440, MenuState::Closed);
        assert_eq!(view.layout.class(), ViewportClass::Wide);
        assert_eq!(view.layout.items().len(), 7);
        assert!(view.layout.items().iter().all(|i| i.tooltip.is_none()));
        assert_eq!(view.active_item().unwrap().path, "/");
    }

    #[test]
    fn test_compact_layout_limits_entries_and_sets_tooltips() {
        let view = render("/search", 0, 1100, MenuState::Closed);
        let items = view.layout.items();
        assert_eq!(view.layout.class(), ViewportClass::NarrowDesktop);
        assert_eq!(items.len(), 5);
        assert_eq!(items[1].tooltip.as_deref(), Some("物件検索"));
        assert!(items[1].active);
        assert_eq!(items.iter().filter(|i| i.active).count(), 1);
    }

    #[test]
    fn test_compact_layout_hides_active_entry_past_limit() {
        let view = render("/contact", 0, 1100, MenuState::Closed);
        assert!(view.active_item().is_none());
    }

    #[test]
    fn test_badge_caps_per_context() {
        assert_eq!(favorites_badge(&render("/", 0, 1440, MenuState::Closed)), None);
        assert_eq!(
            favorites_badge(&render("/", 5, 1440, MenuState::Closed)).as_deref(),
            Some("5")
        );
        assert_eq!(
            favorites_badge(&render("/", 150, 1440, MenuState::Closed)).as_deref(),
            Some("99+")
        );
        assert_eq!(
            favorites_badge(&render("/", 12, 1100, MenuState::Closed)).as_deref(),
            Some("9+")
        );
        assert_eq!(
            favorites_badge(&render("/", 150, 375, MenuState::Open)).as_deref(),
            Some("99+")
        );
    }

    #[test]
    fn test_mobile_closed_has_no_panel() {
        let view = render("/", 3, 375, MenuState::Closed);
        match &view.layout {
            LayoutView::Mobile { toggle, panel } => {
                assert!(panel.is_none());
                assert!(!toggle.aria_expanded);
                assert_eq!(toggle.glyph.name, "menu");
            }
            other => panic!("expected mobile layout, got {other:?}"),
        }
        assert!(!view.backdrop);
    }

    #[test]
    fn test_mobile_open_panel_is_staggered() {
        let view = render("/map-search", 0, 375, MenuState::Open);
        match &view.layout {
            LayoutView::Mobile { toggle, panel } => {
                let panel = panel.as_ref().unwrap();
                assert_eq!(panel.len(), 7);
                assert_eq!(panel[0].appear_delay_ms, Some(0));
                assert_eq!(panel[3].appear_delay_ms, Some(300));
                assert!(panel[2].active);
                assert_eq!(toggle.glyph.name, "close");
                assert!(toggle.aria_expanded);
            }
            other => panic!("expected mobile layout, got {other:?}"),
        }
    }

    #[test]
    fn test_backdrop_iff_open() {
        for width in [375, 1100, 1440] {
            assert!(render("/", 0, width, MenuState::Open).backdrop);
            assert!(!render("/", 0, width, MenuState::Closed).backdrop);
        }
    }

    #[test]
    fn test_secondary_bar_threshold() {
        assert!(render("/", 0, 767, MenuState::Closed).secondary.is_none());

        let view = render("/", 0, 768, MenuState::Closed);
        let links = view.secondary.unwrap();
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].glyph.unwrap().name, "trending-up");
        assert!(links[1].glyph.is_none());
    }

    #[test]
    fn test_unknown_icon_renders_fallback() {
        let mut config = NavConfig::default();
        config.items[0].icon = IconId::Unknown("rocket".to_string());

        let view = render_header(
            &config,
            &inputs("/", 0, 1440),
            MenuState::Closed,
            &LucideIcons,
        );
        assert!(view.layout.items()[0].glyph.is_fallback());
    }

    #[test]
    fn test_serializes_variant_tag() {
        let view = render("/", 0, 1100, MenuState::Closed);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["layout"]["variant"], "compact");
        assert_eq!(json["menu"], "closed");
        assert_eq!(json["backdrop"], false);
    }
}
