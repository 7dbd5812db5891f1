use anyhow::Context;
use clap::Parser;
use phoenyx::backend::{self, BackendChoice};
use phoenyx::demos::Demo;
use phoenyx::{Config, Renderer};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phoenyx")]
#[command(version = version(), about = "Run one of the bundled phoenyx sketches")]
struct Cli {
    /// Sketch to run
    #[arg(value_enum)]
    demo: Demo,

    /// Render without a window and save the last frame
    #[arg(long)]
    headless: bool,

    /// Frames to render in headless mode
    #[arg(long, default_value_t = 120, value_name = "N")]
    frames: u64,

    /// PNG written after a headless run
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/phoenyx/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn version() -> &'static str {
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("PHOENYX_GIT_HASH"), ")")
}

fn load_config(path: Option<&PathBuf>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if !cli.headless && std::env::var_os("WAYLAND_DISPLAY").is_none() {
        log::error!("WAYLAND_DISPLAY not set - a window needs a Wayland compositor.");
        log::error!("Use --headless to render to a PNG instead.");
        return Err(anyhow::anyhow!("WAYLAND_DISPLAY not set"));
    }

    let mut config = load_config(cli.config.as_ref());
    let (width, height) = cli.demo.size();
    config.window.width = width;
    config.window.height = height;
    config.window.title = cli.demo.title().to_string();

    let renderer = Renderer::with_config(config).context("Failed to create renderer")?;
    let mut sketch = cli.demo.sketch();

    let choice = if cli.headless {
        BackendChoice::Headless {
            frames: cli.frames,
            output: cli.output,
        }
    } else {
        BackendChoice::Wayland
    };

    log::info!("Running '{}'", cli.demo.title());
    backend::run(renderer, sketch.as_mut(), choice)?;
    log::info!("Sketch finished");

    Ok(())
}
