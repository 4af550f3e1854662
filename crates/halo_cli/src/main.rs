//! Halo CLI
//!
//! Render glow border frames and replay scripted haptics sessions headlessly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use halo_animation::AnimationScheduler;
use halo_app::{AppConfig, ComposerScreen, HapticsScreen, Screen, CONFIG_FILE_NAME};
use halo_core::{RecordingContext, Size};
use halo_platform::{LoggingHaptics, ScreenEvent};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod demo;
mod describe;

#[derive(Parser)]
#[command(name = "halo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Halo glow border and haptics playground", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the draw commands of one frame
    Render {
        /// Viewport width in layout units
        #[arg(long, default_value = "390")]
        width: f32,

        /// Viewport height in layout units
        #[arg(long, default_value = "844")]
        height: f32,

        /// Animation time to advance before painting, in milliseconds
        #[arg(short, long, default_value = "0")]
        time_ms: f32,

        /// Which screen's border to render
        #[arg(short, long, value_enum, default_value = "main")]
        screen: ScreenKind,

        /// Config file (defaults to ./halo.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Replay a scripted session with logged haptics
    Demo {
        /// Config file (defaults to ./halo.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Frames to tick at 60 fps between steps
        #[arg(short, long, default_value = "30")]
        frames: u32,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write the default configuration
    Init {
        /// Destination file
        #[arg(default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScreenKind {
    Main,
    Composer,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render {
            width,
            height,
            time_ms,
            screen,
            config,
        } => cmd_render(width, height, time_ms, screen, config.as_deref()),

        Commands::Demo { config, frames } => {
            let config = load_config(config.as_deref())?;
            demo::run(&config, frames)
        }

        Commands::Config { command } => match command {
            ConfigCommands::Init { path, force } => cmd_config_init(&path, force),
        },
    }
}

/// Load an explicit config, or `./halo.toml` if it exists, or defaults
fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => AppConfig::load_or_default(Path::new(CONFIG_FILE_NAME))
            .with_context(|| format!("Failed to load {CONFIG_FILE_NAME}")),
    }
}

fn cmd_render(
    width: f32,
    height: f32,
    time_ms: f32,
    kind: ScreenKind,
    config: Option<&Path>,
) -> Result<()> {
    if !(width >= 0.0 && height >= 0.0) {
        anyhow::bail!("Viewport must be non-negative, got {width}x{height}");
    }
    let config = load_config(config)?;
    let scheduler = AnimationScheduler::new();
    let mut screen: Box<dyn Screen> = match kind {
        ScreenKind::Main => Box::new(
            HapticsScreen::new(&config, Arc::new(LoggingHaptics), scheduler.handle())
                .context("Invalid main screen configuration")?,
        ),
        ScreenKind::Composer => Box::new(
            ComposerScreen::new(config.composer_glow.clone(), scheduler.handle())
                .context("Invalid composer configuration")?,
        ),
    };

    screen.handle_event(ScreenEvent::resized(width, height));
    if time_ms > 0.0 {
        screen.handle_event(ScreenEvent::DidAppear);
        scheduler.tick_by(time_ms);
    }

    let mut ctx = RecordingContext::new(Size::new(width, height));
    screen.paint(&mut ctx);

    info!(
        "{} at {}x{}, t={}ms, angle {:.4} rad",
        screen.title(),
        width,
        height,
        time_ms,
        screen.glow().angle()
    );
    for (index, command) in ctx.commands().iter().enumerate() {
        println!("{index:>3}  {}", describe::command(command));
    }
    if ctx.commands().is_empty() {
        println!("(empty frame)");
    }

    screen.handle_event(ScreenEvent::WillDisappear);
    Ok(())
}

fn cmd_config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    AppConfig::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote default configuration to {}", path.display());
    Ok(())
}
