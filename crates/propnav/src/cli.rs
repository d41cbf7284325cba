//! CLI helpers: config resolution, menu event replay and output formatting

use anyhow::{bail, Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use propnav_core::render::ItemView;
use propnav_core::{
    render_header, HeaderView, IconResolver, LayoutView, LucideIcons, MenuController, MenuEvent,
    MenuState, NavConfig, Navigator, RenderInputs, RouteContext,
};
use std::path::{Path, PathBuf};
use tracing::warn;

// ============================================================================
// Config Resolution
// ============================================================================

/// Default config location: `<config_dir>/propnav/navigation.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("propnav").join("navigation.toml"))
}

/// Pick the config file to load: explicit flag/env first, then the default
/// location if it exists.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| default_config_path().filter(|path| path.exists()))
}

/// Load the navigation config, falling back to the built-in navigation when
/// no file is configured.
pub fn load_config(path: Option<&Path>) -> Result<NavConfig> {
    match path {
        Some(path) => NavConfig::load(path).map_err(|e| {
            let hint = e
                .suggestion()
                .map(|s| format!(" ({})", s))
                .unwrap_or_default();
            anyhow::Error::new(e).context(format!(
                "Invalid navigation config {}{}",
                path.display(),
                hint
            ))
        }),
        None => {
            warn!("No navigation config file, using built-in navigation");
            Ok(NavConfig::default())
        }
    }
}

// ============================================================================
// Event Replay
// ============================================================================

/// Parse a menu event: `toggle`, `backdrop`, or `select:<path>`
pub fn parse_event(s: &str) -> Result<MenuEvent> {
    match s {
        "toggle" => Ok(MenuEvent::Toggle),
        "backdrop" => Ok(MenuEvent::BackdropClick),
        _ => {
            if let Some(path) = s.strip_prefix("select:") {
                if !path.starts_with('/') {
                    bail!("Select path must start with '/': {}", path);
                }
                return Ok(MenuEvent::Select(path.to_string()));
            }
            bail!(
                "Unknown menu event '{}' (expected: toggle, backdrop, select:<path>)",
                s
            )
        }
    }
}

/// Records navigation requests instead of performing them
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub requests: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&mut self, path: &str) {
        self.requests.push(path.to_string());
    }
}

/// Outcome of replaying events against a freshly mounted header
#[derive(Debug)]
pub struct Replay {
    pub state: MenuState,
    pub requests: Vec<String>,
}

impl Replay {
    /// Route after replay: the last navigation target, else `initial`
    pub fn current_path<'a>(&'a self, initial: &'a str) -> &'a str {
        self.requests.last().map(String::as_str).unwrap_or(initial)
    }
}

pub fn replay_events(events: &[MenuEvent]) -> Replay {
    let mut menu = MenuController::new();
    let mut navigator = RecordingNavigator::default();

    for event in events {
        menu.dispatch(event.clone(), &mut navigator);
    }

    Replay {
        state: menu.state(),
        requests: navigator.requests,
    }
}

/// Replay `events` starting at `path` and project the resulting header
pub fn preview(
    config: &NavConfig,
    path: &str,
    width: u32,
    favorites: u32,
    events: &[MenuEvent],
) -> (HeaderView, Replay) {
    let replay = replay_events(events);
    let inputs = RenderInputs {
        route: RouteContext::new(replay.current_path(path)),
        favorites_count: favorites,
        viewport_width: width,
    };
    let view = render_header(config, &inputs, replay.state, &LucideIcons);
    (view, replay)
}

// ============================================================================
// Formatters
// ============================================================================

fn header_cell(text: &str, no_color: bool) -> Cell {
    if no_color {
        Cell::new(text)
    } else {
        Cell::new(text).fg(Color::Cyan)
    }
}

fn items_table(items: &[ItemView], no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("#", no_color),
        header_cell("Icon", no_color),
        header_cell("Label", no_color),
        header_cell("Path", no_color),
        header_cell("Active", no_color),
        header_cell("Badge", no_color),
        header_cell("Delay", no_color),
    ]);

    for (index, item) in items.iter().enumerate() {
        let active = if item.active { "●" } else { "" };
        let active_cell = if item.active && !no_color {
            Cell::new(active).fg(Color::Green)
        } else {
            Cell::new(active)
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(item.glyph.text),
            Cell::new(item.tooltip.as_deref().unwrap_or(&item.label)),
            Cell::new(&item.path),
            active_cell,
            Cell::new(item.badge.as_deref().unwrap_or("-")),
            Cell::new(
                item.appear_delay_ms
                    .map(|ms| format!("{}ms", ms))
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
    }

    table
}

/// Format a header projection as text (or JSON)
pub fn format_header_view(
    view: &HeaderView,
    replay: &Replay,
    json: bool,
    no_color: bool,
) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(view).context("Failed to serialize header view");
    }

    let mut lines = vec![];
    lines.push(format!(
        "{} {}{}",
        view.brand.glyph.text,
        view.brand.title,
        view.brand
            .subtitle
            .as_deref()
            .map(|s| format!(" - {}", s))
            .unwrap_or_default()
    ));
    lines.push(format!("Layout:    {}", view.layout.class().name()));
    lines.push(format!(
        "Menu:      {}",
        if view.menu.is_open() { "open" } else { "closed" }
    ));
    lines.push(format!(
        "Backdrop:  {}",
        if view.backdrop { "shown" } else { "hidden" }
    ));
    if !replay.requests.is_empty() {
        lines.push(format!("Navigated: {}", replay.requests.join(" -> ")));
    }

    match &view.layout {
        LayoutView::Mobile { toggle, panel } => {
            lines.push(format!("Toggle:    {} ({})", toggle.glyph.text, toggle.aria_label));
            match panel {
                Some(items) => lines.push(items_table(items, no_color).to_string()),
                None => lines.push("(menu collapsed)".to_string()),
            }
        }
        LayoutView::Wide { items } | LayoutView::Compact { items } => {
            lines.push(items_table(items, no_color).to_string());
        }
    }

    if let Some(links) = &view.secondary {
        let rendered: Vec<String> = links
            .iter()
            .map(|link| match link.glyph {
                Some(glyph) => format!("{} {} ({})", glyph.text, link.label, link.path),
                None => format!("{} ({})", link.label, link.path),
            })
            .collect();
        lines.push(format!("Secondary: {}", rendered.join(" | ")));
    }

    Ok(lines.join("\n"))
}

/// Summary printed by `check`
pub fn format_config_summary(config: &NavConfig, source: Option<&Path>) -> String {
    let mut lines = vec![];
    lines.push(format!(
        "Source:        {}",
        source
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    ));
    lines.push(format!("Brand:         {}", config.brand.title));
    lines.push(format!("Items:         {}", config.items.len()));
    lines.push(format!(
        "Favorites:     {}",
        config.favorites_path().unwrap_or("-")
    ));
    lines.push(format!("Secondary:     {}", config.secondary.len()));
    lines.push(format!(
        "Breakpoints:   secondary={} compact={} wide={}",
        config.breakpoints.secondary_bar, config.breakpoints.compact, config.breakpoints.wide
    ));
    lines.push(format!("Compact limit: {}", config.compact_limit));

    let unresolved: Vec<_> = config
        .items
        .iter()
        .filter(|item| LucideIcons.resolve(&item.icon).is_none())
        .map(|item| format!("{} ({})", item.icon, item.path))
        .collect();
    if !unresolved.is_empty() {
        warn!(count = unresolved.len(), "Icons will use the fallback glyph");
        lines.push(format!("Fallback icons: {}", unresolved.join(", ")));
    }

    lines.join("\n")
}

// ============================================================================
// Tests
// ============================================================================
