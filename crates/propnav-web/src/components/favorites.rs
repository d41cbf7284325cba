//! Favorites count context
//!
//! The header only reads the count. Whatever owns the favorites collection
//! keeps it current through [`FavoritesContext::set`].

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct FavoritesContext {
    count: RwSignal<u32>,
}

impl FavoritesContext {
    pub fn new(initial: u32) -> Self {
        Self {
            count: RwSignal::new(initial),
        }
    }

    /// Current count (tracked)
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    pub fn set(&self, count: u32) {
        self.count.set(count);
    }
}

impl Default for FavoritesContext {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Provides a [`FavoritesContext`] to everything below it
#[component]
pub fn FavoritesProvider(#[prop(optional)] initial: u32, children: Children) -> impl IntoView {
    provide_context(FavoritesContext::new(initial));

    children()
}

/// Favorites count from context, `0` when no provider is mounted
pub fn use_favorites_count() -> Signal<u32> {
    let context = use_context::<FavoritesContext>();
    Signal::derive(move || context.map(|c| c.count()).unwrap_or(0))
}
