//! propnav - Site header navigation preview and API server

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "propnav",
    version,
    about = "Site header navigation: preview layouts and serve the navigation API",
    long_about = "Preview how the site header renders for a given route, viewport width and\n\
                  favorites count, replay mobile menu interactions, validate navigation\n\
                  config files and serve the navigation API.\n\
                  \n\
                  Examples:\n\
                    propnav check                                  # Validate config\n\
                    propnav preview --path /search --width 1440    # Wide layout\n\
                    propnav preview --width 1100 --favorites 12    # Compact layout, 9+ badge\n\
                    propnav preview --width 390 --event toggle     # Open mobile menu\n\
                    propnav preview --width 390 --event toggle --event select:/\n\
                    propnav serve --port 3333                      # Navigation API\n\
                  \n\
                  Environment Variables:\n\
                    PROPNAV_CONFIG                 # Navigation config file (TOML or JSON)\n\
                    PROPNAV_NO_COLOR               # Disable ANSI colors\n\
                    RUST_LOG                       # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Navigation config file (default: <config_dir>/propnav/navigation.toml, else built-in)
    #[arg(long, global = true, env = "PROPNAV_CONFIG")]
    config: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "PROPNAV_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the navigation API
    Serve {
        /// Port for web server
        #[arg(long, default_value = "3333")]
        port: u16,
    },
    /// Render the header for one set of inputs
    Preview {
        /// Current route
        #[arg(long, default_value = "/")]
        path: String,
        /// Viewport width in pixels
        #[arg(long, default_value = "1440")]
        width: u32,
        /// Favorites count shown on the badge
        #[arg(long, default_value = "0")]
        favorites: u32,
        /// Menu events to replay: toggle, backdrop, select:<path>
        #[arg(long = "event", short = 'e')]
        events: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the navigation config and print a summary
    Check,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli::resolve_config_path(cli.config);
    let config = cli::load_config(config_path.as_deref())?;

    match cli.mode {
        Mode::Serve { port } => {
            propnav_web::run(Arc::new(config), port).await?;
        }
        Mode::Preview {
            path,
            width,
            favorites,
            events,
            json,
        } => {
            let events = events
                .iter()
                .map(|e| cli::parse_event(e))
                .collect::<Result<Vec<_>>>()
                .context("Invalid --event")?;
            let (view, replay) = cli::preview(&config, &path, width, favorites, &events);
            println!(
                "{}",
                cli::format_header_view(&view, &replay, json, cli.no_color)?
            );
        }
        Mode::Check => {
            println!(
                "{}",
                cli::format_config_summary(&config, config_path.as_deref())
            );
            println!("\n✓ Navigation config is valid");
        }
    }

    Ok(())
}
