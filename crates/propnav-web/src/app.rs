//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};
use propnav_core::NavConfig;

use crate::components::{FavoritesProvider, Header};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <FavoritesProvider>
            <Router>
                <div class="app">
                    <Header />
                    <main class="content">
                        <Routes fallback=|| view! { <PageStub /> }>
                            <Route path=path!("/") view=PageStub />
                        </Routes>
                    </main>
                </div>
            </Router>
        </FavoritesProvider>
    }
}

/// Placeholder page titled after the matching navigation entry. Real pages
/// belong to the host application.
#[component]
fn PageStub() -> impl IntoView {
    let location = use_location();
    let config = NavConfig::default();

    let title = move || {
        let path = location.pathname.get();
        config
            .items
            .iter()
            .find(|item| item.path == path)
            .map(|item| item.label.clone())
            .or_else(|| {
                config
                    .secondary
                    .iter()
                    .find(|link| link.path == path)
                    .map(|link| link.label.clone())
            })
            .unwrap_or(path)
    };

    view! {
        <section class="page-stub">
            <h2>{title}</h2>
        </section>
    }
}
