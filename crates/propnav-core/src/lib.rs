//! propnav-core - Core library for propnav
//!
//! Framework-free navigation logic for a site header: the navigation model,
//! the exact-match route matcher, the mobile menu state machine, responsive
//! layout selection and the pure projection into a render description.

pub mod badge;
pub mod config;
pub mod error;
pub mod icon;
pub mod layout;
pub mod menu;
pub mod model;
pub mod render;
pub mod route;

pub use badge::{badge_text, BadgeContext};
pub use config::{Brand, NavConfig, NavItemConfig, SecondaryLink};
pub use error::ConfigError;
pub use icon::{Glyph, IconId, IconResolver, LucideIcons};
pub use layout::{Breakpoints, Viewport, ViewportClass};
pub use menu::{MenuController, MenuEvent, MenuState, NavigationRequest, Navigator};
pub use model::{build_navigation, NavigationEntry};
pub use render::{render_header, HeaderView, ItemView, LayoutView, RenderInputs};
pub use route::{active_entry, is_active, RouteContext};
