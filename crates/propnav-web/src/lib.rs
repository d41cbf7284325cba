//! propnav-web - Leptos header components and navigation API for propnav

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
pub use components::{FavoritesContext, FavoritesProvider, Header};
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use anyhow::{Context, Result};
    use propnav_core::NavConfig;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tracing::info;

    /// Run the navigation API server
    pub async fn run(config: Arc<NavConfig>, port: u16) -> Result<()> {
        let router = crate::create_router(config);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Navigation API listening on http://{}", addr);

        axum::serve(listener, router)
            .await
            .context("Navigation API server stopped")?;

        Ok(())
    }
}
