use std::path::PathBuf;

const APP_DIR: &str = "particle-gen";
const CONFIG_FILE: &str = "config.ini";

/// Per-user config directory, `None` on platforms without one.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}
