//! Leptos UI components

mod favorites;
mod header;
mod viewport;

pub use favorites::{use_favorites_count, FavoritesContext, FavoritesProvider};
pub use header::Header;
pub use viewport::use_viewport_width;
