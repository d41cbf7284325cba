//! Icon identifiers and glyph resolution
//!
//! Icons are referenced by a closed set of identifiers. Resolution to a
//! renderable glyph can fail (for instance an unknown name coming from a
//! config file); callers always go through [`IconResolver::resolve_or_default`]
//! so a missing icon degrades to a default glyph instead of blocking rendering.

use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Abstract icon reference carried by navigation entries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconId {
    Home,
    Search,
    Map,
    Plus,
    Info,
    Mail,
    Heart,
    TrendingUp,
    Menu,
    Close,
    /// Name that matched no known icon; resolves to the fallback glyph
    Unknown(String),
}

impl IconId {
    pub fn name(&self) -> &str {
        match self {
            IconId::Home => "home",
            IconId::Search => "search",
            IconId::Map => "map",
            IconId::Plus => "plus",
            IconId::Info => "info",
            IconId::Mail => "mail",
            IconId::Heart => "heart",
            IconId::TrendingUp => "trending-up",
            IconId::Menu => "menu",
            IconId::Close => "close",
            IconId::Unknown(name) => name,
        }
    }

    /// Parse an icon name. Never fails: unrecognised names map to `Unknown`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "home" => IconId::Home,
            "search" => IconId::Search,
            "map" => IconId::Map,
            "plus" => IconId::Plus,
            "info" => IconId::Info,
            "mail" => IconId::Mail,
            "heart" => IconId::Heart,
            "trending-up" | "trending_up" | "trendingup" => IconId::TrendingUp,
            "menu" => IconId::Menu,
            "close" | "x" => IconId::Close,
            _ => IconId::Unknown(name.to_string()),
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for IconId {
    fn from(name: String) -> Self {
        IconId::parse(&name)
    }
}

impl From<IconId> for String {
    fn from(icon: IconId) -> Self {
        icon.name().to_string()
    }
}

/// A renderable glyph: inline SVG body plus a one-character terminal form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Glyph {
    pub name: &'static str,
    /// SVG child elements, drawn in a 24x24 stroke-based viewBox
    pub svg: &'static str,
    pub text: &'static str,
}

impl Glyph {
    /// Default glyph substituted whenever an icon cannot be resolved
    pub const fn fallback() -> Self {
        Glyph {
            name: "fallback",
            svg: r#"<circle cx="12" cy="12" r="10"/>"#,
            text: "•",
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.name == "fallback"
    }

    /// Complete `<svg>` element at the given pixel size
    pub fn svg_markup(&self, size: u32) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{}</svg>"#,
            self.svg
        )
    }
}

/// Maps icon identifiers to glyphs
pub trait IconResolver {
    /// Resolve an icon, or `None` if this resolver has no glyph for it
    fn resolve(&self, icon: &IconId) -> Option<Glyph>;

    fn resolve_or_default(&self, icon: &IconId) -> Glyph {
        self.resolve(icon).unwrap_or_else(|| {
            debug!(icon = %icon, "Icon not resolved, using fallback glyph");
            Glyph::fallback()
        })
    }
}

/// Built-in Lucide-style icon set
#[derive(Debug, Clone, Copy, Default)]
pub struct LucideIcons;

impl IconResolver for LucideIcons {
    fn resolve(&self, icon: &IconId) -> Option<Glyph> {
        let (name, svg, text) = match icon {
            IconId::Home => (
                "home",
                r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#,
                "⌂",
            ),
            IconId::Search => (
                "search",
                r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
                "⌕",
            ),
            IconId::Map => (
                "map",
                r#"<polygon points="3 6 9 3 15 6 21 3 21 18 15 21 9 18 3 21"/><line x1="9" x2="9" y1="3" y2="18"/><line x1="15" x2="15" y1="6" y2="21"/>"#,
                "▦",
            ),
            IconId::Plus => ("plus", r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#, "+"),
            IconId::Info => (
                "info",
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#,
                "i",
            ),
            IconId::Mail => (
                "mail",
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
                "✉",
            ),
            IconId::Heart => (
                "heart",
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#,
                "♥",
            ),
            IconId::TrendingUp => (
                "trending-up",
                r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#,
                "↗",
            ),
            IconId::Menu => (
                "menu",
                r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
                "☰",
            ),
            IconId::Close => ("close", r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#, "✕"),
            IconId::Unknown(_) => return None,
        };
        Some(Glyph { name, svg, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(IconId::parse("home"), IconId::Home);
        assert_eq!(IconId::parse("Heart"), IconId::Heart);
        assert_eq!(IconId::parse("trending_up"), IconId::TrendingUp);
        assert_eq!(IconId::parse("x"), IconId::Close);
    }

    #[test]
    fn test_parse_unknown_keeps_name() {
        let icon = IconId::parse("rocket");
        assert_eq!(icon, IconId::Unknown("rocket".to_string()));
        assert_eq!(icon.to_string(), "rocket");
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        let glyph = LucideIcons.resolve_or_default(&IconId::Unknown("rocket".into()));
        assert!(glyph.is_fallback());
        assert_eq!(glyph, Glyph::fallback());
    }

    #[test]
    fn test_custom_resolver_falls_back_for_missing_icons() {
        struct HomeOnly;
        impl IconResolver for HomeOnly {
            fn resolve(&self, icon: &IconId) -> Option<Glyph> {
                matches!(icon, IconId::Home).then(|| Glyph {
                    name: "home",
                    svg: "",
                    text: "H",
                })
            }
        }

        assert_eq!(HomeOnly.resolve_or_default(&IconId::Home).text, "H");
        assert!(HomeOnly.resolve_or_default(&IconId::Mail).is_fallback());
    }

    #[test]
    fn test_every_named_icon_resolves() {
        for icon in [
            IconId::Home,
            IconId::Search,
            IconId::Map,
            IconId::Plus,
            IconId::Info,
            IconId::Mail,
            IconId::Heart,
            IconId::TrendingUp,
            IconId::Menu,
            IconId::Close,
        ] {
            let glyph = LucideIcons.resolve(&icon).unwrap();
            assert_eq!(glyph.name, icon.name());
        }
    }

    #[test]
    fn test_serde_uses_plain_names() {
        let json = serde_json::to_string(&IconId::TrendingUp).unwrap();
        assert_eq!(json, "\"trending-up\"");

        let icon: IconId = serde_json::from_str("\"mail\"").unwrap();
        assert_eq!(icon, IconId::Mail);
    }

    #[test]
    fn test_svg_markup_wraps_body() {
        let markup = Glyph::fallback().svg_markup(20);
        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(r#"width="20""#));
        assert!(markup.ends_with("</svg>"));
    }
}
