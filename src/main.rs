//! wavedeck — companion media server for the browser spectrum visualizer.
//!
//! Thin binary entry point. All logic lives in the `wavedeck-core`
//! and `wavedeck-server` crates.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wavedeck_core::platform::{launch_browser, system_mount_source};
use wavedeck_core::ServerConfig;
use wavedeck_server::AppState;

#[derive(Parser, Debug)]
#[command(name = "wavedeck")]
#[command(about = "Serve a music folder to the wavedeck browser player", long_about = None)]
#[command(version)]
struct Args {
    /// Music root; without it the whole filesystem can be browsed
    #[arg(short = 'm', long = "music", value_name = "PATH")]
    music: Option<PathBuf>,

    /// Port to listen on
    #[arg(short = 'p', long, default_value_t = wavedeck_core::config::DEFAULT_PORT)]
    port: u16,

    /// Do not open the player in a browser
    #[arg(short = 's', long)]
    silent: bool,

    /// Accept connections from other machines
    #[arg(short = 'e', long)]
    external: bool,

    /// Folder of background images and videos
    #[arg(short = 'b', long, value_name = "PATH")]
    backgrounds: Option<PathBuf>,

    /// Client bundle directory
    #[arg(long, value_name = "PATH", default_value = wavedeck_core::config::DEFAULT_PUBLIC_DIR)]
    public: PathBuf,

    /// Include dotfiles in directory listings
    #[arg(long)]
    hidden: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        let mut config = ServerConfig::new()
            .with_port(self.port)
            .with_external(self.external)
            .with_browser(!self.silent)
            .with_public_dir(&self.public)
            .with_hidden(self.hidden);
        if let Some(music) = &self.music {
            config = config.with_music_root(music);
        }
        if let Some(backgrounds) = &self.backgrounds {
            config = config.with_backgrounds(backgrounds);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialise structured logging. RUST_LOG overrides the flag.
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = args
        .into_config()
        .validate()
        .context("invalid configuration")?;

    tracing::info!("wavedeck {} starting", env!("CARGO_PKG_VERSION"));
    match &config.music_root {
        Some(root) => tracing::info!("Music root: {}", root.display()),
        None => tracing::info!("No music root given, browsing the whole filesystem"),
    }
    if config.allow_external {
        tracing::warn!("Accepting connections from other machines");
    }

    let listener = wavedeck_server::bind(&config).await?;
    if config.open_browser {
        launch_browser(&config.local_url());
    }

    let state = AppState::new(config, system_mount_source());
    wavedeck_server::serve(listener, state).await
}
