//! Static navigation configuration
//!
//! Supplied once at startup and immutable afterwards. Loaded from TOML or
//! JSON, or taken from the built-in default (the store-property site header).

use crate::error::ConfigError;
use crate::icon::IconId;
use crate::layout::Breakpoints;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Logo block at the start of the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

fn default_home_path() -> String {
    "/".to_string()
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            title: "店舗物件サイト".to_string(),
            subtitle: Some("Store Property Search".to_string()),
            home_path: default_home_path(),
        }
    }
}

/// One primary navigation item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItemConfig {
    pub label: String,
    pub path: String,
    pub icon: IconId,
    /// Carries the live favorites badge
    #[serde(default)]
    pub favorites: bool,
}

impl NavItemConfig {
    pub fn new(label: impl Into<String>, path: impl Into<String>, icon: IconId) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon,
            favorites: false,
        }
    }

    pub fn with_favorites_badge(mut self) -> Self {
        self.favorites = true;
        self
    }
}

/// Link in the secondary bar below the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryLink {
    pub label: String,
    pub path: String,
    #[serde(default)]
    pub icon: Option<IconId>,
}

/// Complete header configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub brand: Brand,
    pub items: Vec<NavItemConfig>,
    #[serde(default)]
    pub secondary: Vec<SecondaryLink>,
    #[serde(default)]
    pub breakpoints: Breakpoints,
    /// Number of items shown by the compact (icon-only) layout
    #[serde(default = "default_compact_limit")]
    pub compact_limit: usize,
}

fn default_compact_limit() -> usize {
    5
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            items: vec![
                NavItemConfig::new("ホーム", "/", IconId::Home),
                NavItemConfig::new("物件検索", "/search", IconId::Search),
                NavItemConfig::new("地図検索", "/map-search", IconId::Map),
                NavItemConfig::new("物件掲載", "/list-property", IconId::Plus),
                NavItemConfig::new("お気に入り", "/favorites", IconId::Heart)
                    .with_favorites_badge(),
                NavItemConfig::new("会社概要", "/about", IconId::Info),
                NavItemConfig::new("お問合せ", "/contact", IconId::Mail),
            ],
            secondary: vec![
                SecondaryLink {
                    label: "飲食店ニュース".to_string(),
                    path: "/restaurant-news".to_string(),
                    icon: Some(IconId::TrendingUp),
                },
                SecondaryLink {
                    label: "開業サポート".to_string(),
                    path: "/opening-support".to_string(),
                    icon: None,
                },
                SecondaryLink {
                    label: "業者リンク".to_string(),
                    path: "/business-links".to_string(),
                    icon: None,
                },
            ],
            breakpoints: Breakpoints::default(),
            compact_limit: default_compact_limit(),
        }
    }
}

impl NavConfig {
    /// Load and validate a config file.
    ///
    /// Files ending in `.toml` are parsed as TOML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParse {
                path: path.to_path_buf(),
                message: source.message().to_string(),
                source,
            })?
        } else {
            serde_json::from_str::<Self>(&content).map_err(|source| ConfigError::JsonParse {
                path: path.to_path_buf(),
                message: source.to_string(),
                source,
            })?
        };

        config.validate()?;
        info!(
            path = %path.display(),
            items = config.items.len(),
            "Navigation config loaded"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check the invariants the header relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::NoItems);
        }

        let mut seen = HashSet::new();
        let mut favorites: Option<&str> = None;
        for item in &self.items {
            if !item.path.starts_with('/') {
                return Err(ConfigError::RelativePath {
                    path: item.path.clone(),
                });
            }
            if item.label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel {
                    path: item.path.clone(),
                });
            }
            if !seen.insert(item.path.as_str()) {
                return Err(ConfigError::DuplicatePath {
                    path: item.path.clone(),
                });
            }
            if item.favorites {
                if let Some(first) = favorites {
                    return Err(ConfigError::MultipleFavorites {
                        first: first.to_string(),
                        second: item.path.clone(),
                    });
                }
                favorites = Some(&item.path);
            }
        }

        for link in &self.secondary {
            if !link.path.starts_with('/') {
                return Err(ConfigError::RelativePath {
                    path: link.path.clone(),
                });
            }
        }

        let bp = &self.breakpoints;
        if !(bp.secondary_bar < bp.compact && bp.compact < bp.wide) {
            return Err(ConfigError::InvalidBreakpoints {
                secondary_bar: bp.secondary_bar,
                compact: bp.compact,
                wide: bp.wide,
            });
        }

        if self.compact_limit == 0 {
            return Err(ConfigError::InvalidCompactLimit);
        }

        debug!(items = self.items.len(), "Navigation config validated");
        Ok(())
    }

    /// Path of the item carrying the favorites badge, if any
    pub fn favorites_path(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.favorites)
            .map(|item| item.path.as_str())
    }
}
