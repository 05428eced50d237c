use configparser::ini;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Width of the border kept clear on every edge of the screen.
pub const MARGIN: u32 = 10;
/// Smallest screen dimension that still leaves a drawable area.
pub const MIN_DIMENSION: u32 = 2 * MARGIN;

pub const SCREEN_WIDTH: u32 = 1200;
pub const SCREEN_HEIGHT: u32 = 700;

const SECTION: &str = "screen";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("screen width {0} is smaller than the minimum of {}", MIN_DIMENSION)]
    Width(u32),
    #[error("screen height {0} is smaller than the minimum of {}", MIN_DIMENSION)]
    Height(u32),
    #[error(
        "screen size {width}x{height} is smaller than the minimum of {}x{}",
        MIN_DIMENSION,
        MIN_DIMENSION
    )]
    Both { width: u32, height: u32 },
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse ini file {path}: {reason}")]
    IniParse { path: PathBuf, reason: String },
    #[error("required key `{section}.{key}` is missing from config")]
    MissingKey { section: String, key: String },
    #[error("key `{section}.{key}` is not a valid dimension: {reason}")]
    InvalidValue {
        section: String,
        key: String,
        reason: String,
    },
    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}

#[derive(Error, Debug)]
#[error("failed to write config file {path}: {source}")]
pub struct ConfigWriteError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

/// The size of the screen particles are placed on.
///
/// Can only be built through [`ScreenConfig::new`], so every instance leaves
/// at least one drawable unit inside the margins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenConfig {
    width: u32,
    height: u32,
}

impl ScreenConfig {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigurationError> {
        match (width < MIN_DIMENSION, height < MIN_DIMENSION) {
            (true, true) => Err(ConfigurationError::Both { width, height }),
            (true, false) => Err(ConfigurationError::Width(width)),
            (false, true) => Err(ConfigurationError::Height(height)),
            (false, false) => Ok(Self { width, height }),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of distinct horizontal positions inside the margins.
    pub fn span_x(&self) -> u32 {
        self.width - MIN_DIMENSION + 1
    }

    /// Number of distinct vertical positions inside the margins.
    pub fn span_y(&self) -> u32 {
        self.height - MIN_DIMENSION + 1
    }

    /// Write the size into the `[screen]` section of `path`, keeping any
    /// other sections already in the file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigWriteError> {
        let path = path.as_ref();
        let to_write_error = |source: io::Error| ConfigWriteError {
            path: path.to_owned(),
            source,
        };

        let mut config = ini::Ini::new();
        if path.exists() {
            config
                .load(path)
                .map_err(|reason| io::Error::new(io::ErrorKind::InvalidData, reason))
                .map_err(to_write_error)?;
        }
        config.set(SECTION, "width", Some(self.width.to_string()));
        config.set(SECTION, "height", Some(self.height.to_string()));
        config.write(path).map_err(to_write_error)
    }
}

/// Read the raw `[screen]` size from `path` without checking it against the
/// minimum, so callers can layer overrides on top before validating.
pub fn load_size<P: AsRef<Path>>(path: P) -> Result<(u32, u32), ConfigLoadError> {
    let config = load_config(path.as_ref())?;
    let width = fetch_dimension(&config, SECTION, "width")?;
    let height = fetch_dimension(&config, SECTION, "height")?;
    Ok((width, height))
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

fn fetch_key(config: &ini::Ini, section: &str, key: &str) -> Result<String, ConfigLoadError> {
    config.get(section, key).ok_or(ConfigLoadError::MissingKey {
        section: section.to_owned(),
        key: key.to_owned(),
    })
}

fn fetch_dimension(config: &ini::Ini, section: &str, key: &str) -> Result<u32, ConfigLoadError> {
    fetch_key(config, section, key)?
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigLoadError::InvalidValue {
            section: section.to_owned(),
            key: key.to_owned(),
            reason: e.to_string(),
        })
}

fn load_config(path: &Path) -> Result<ini::Ini, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_owned(),
        source,
    })?;
    let mut config = ini::Ini::new();
    let _ = config
        .read(contents)
        .map_err(|reason| ConfigLoadError::IniParse {
            path: path.to_owned(),
            reason,
        })?;
    Ok(config)
}
