//! mKast Launcher
//!
//! Fullscreen kiosk launcher: a paged grid of games, a password-protected
//! admin panel for managing the catalog, and a password-protected exit.

mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use mkast_config::{AssetLayout, CONFIG_FILE, LauncherConfig};
use mkast_library::{Catalog, DEFAULT_CATALOG_FILE};
use mkast_runner::{CachedIconExtractor, NativeFileChooser, ProcessLauncher};
use mkast_ui::{App, Services};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use render::Renderer;

const WINDOW_TITLE: &str = "Game Launcher";
const FRAME_TIME: Duration = Duration::from_micros(16_667);

#[derive(Debug, Parser)]
#[command(name = "mkast", version, about = "Kiosk game launcher")]
struct Cli {
    /// Game catalog file
    #[arg(value_name = "GAMES_FILE", conflicts_with = "games")]
    games_file: Option<PathBuf>,

    /// Game catalog file
    #[arg(short, long, value_name = "PATH")]
    games: Option<PathBuf>,
}

impl Cli {
    fn catalog_path(&self) -> PathBuf {
        self.games_file
            .clone()
            .or_else(|| self.games.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
    }
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    info!("mKast launcher starting...");

    let assets = AssetLayout::new(".");
    assets
        .ensure()
        .context("Failed to create asset directories")?;

    let config = load_config(Path::new(CONFIG_FILE));
    let catalog_path = cli.catalog_path();
    let catalog = Catalog::open(&catalog_path)
        .with_context(|| format!("Failed to open game catalog {}", catalog_path.display()))?;

    let conf = window_conf(&config);
    macroquad::Window::from_config(conf, run(config, catalog, assets));

    info!("mKast launcher stopped");
    Ok(())
}

/// Setup logging to console
fn setup_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn load_config(path: &Path) -> LauncherConfig {
    match LauncherConfig::load_or_init(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default configuration: {}", e);
            LauncherConfig::default()
        }
    }
}

fn window_conf(config: &LauncherConfig) -> Conf {
    let [width, height] = config.resolution;
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        high_dpi: false,
        fullscreen: config.fullscreen,

        ..Default::default()
    }
}

async fn run(config: LauncherConfig, catalog: Catalog, assets: AssetLayout) {
    prevent_quit();

    let font = match assets.find_font() {
        Some(path) => match load_ttf_font(&path.to_string_lossy()).await {
            Ok(font) => {
                info!("Using font {}", path.display());
                Some(font)
            }
            Err(e) => {
                warn!("Failed to load font {}: {}", path.display(), e);
                None
            }
        },
        None => None,
    };

    let services = Services {
        launcher: Box::new(ProcessLauncher::new()),
        icons: Box::new(CachedIconExtractor::new(assets.game_images_dir())),
        chooser: Arc::new(NativeFileChooser),
    };

    let mut app = App::new(config, catalog, assets, services);
    let mut renderer = Renderer::new(font);

    loop {
        let started = Instant::now();

        let scale = renderer.scale(app.context());
        let events = input::collect(scale);
        let view = app.frame(&events);

        if !app.is_running() {
            break;
        }

        renderer.draw(app.context(), &view);

        let elapsed = started.elapsed();
        if elapsed < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - elapsed);
        }

        next_frame().await
    }

    info!("Shutting down");
}
