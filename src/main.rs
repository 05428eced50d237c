mod config;
mod dir;
mod gen;

use clap::Parser;
use config::{ConfigLoadError, ScreenConfig};
use gen::Particle;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "particle-gen")]
#[command(about = "Place a particle at a random point inside the screen margins")]
struct Cli {
    /// Screen width, overrides the config file
    #[arg(long)]
    width: Option<u32>,
    /// Screen height, overrides the config file
    #[arg(long)]
    height: Option<u32>,
    /// INI file holding a [screen] section, defaults to the user config dir
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
    /// Write the resolved screen size back to the config file
    #[arg(long)]
    save_config: bool,
}

/// Defaults, then the config file, then command line flags. The merged size
/// is validated once at the end.
fn resolve_screen(cli: &Cli) -> Result<ScreenConfig, ConfigLoadError> {
    let path = cli
        .config
        .clone()
        .or_else(|| dir::config_file().filter(|path| path.exists()));
    let (width, height) = match path {
        Some(path) => {
            info!("loading config from {}", path.display());
            config::load_size(&path)?
        }
        None => {
            debug!("no config file found, using defaults");
            let screen = ScreenConfig::default();
            (screen.width(), screen.height())
        }
    };

    let screen = ScreenConfig::new(cli.width.unwrap_or(width), cli.height.unwrap_or(height))?;
    Ok(screen)
}

fn save_screen(cli: &Cli, screen: &ScreenConfig) -> Result<(), Box<dyn Error>> {
    let path = match cli.config.clone().or_else(dir::config_file) {
        Some(path) => path,
        None => return Err("no config directory available on this platform".into()),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    screen.save(&path)?;
    info!("saved config to {}", path.display());
    Ok(())
}

fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => {
            info!("using seed {seed}");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(StdRng::from_entropy()),
    }
}

/// Resolve the screen, optionally save it, then write one particle's
/// position to `out`. Nothing is written when the configuration is invalid.
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), Box<dyn Error>> {
    let screen = resolve_screen(cli)?;
    debug!("screen size {}x{}", screen.width(), screen.height());

    if cli.save_config {
        save_screen(cli, &screen)?;
    }

    let mut rng = make_rng(cli.seed);
    let particle = Particle::new(&screen, rng.as_mut());
    debug!("particle at ({}, {})", particle.x(), particle.y());
    write!(out, "{}", particle.position())?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
