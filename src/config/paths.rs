use std::path::{Path, PathBuf};

const APP_DIR: &str = "league_watch";

/// Platform config directory for this application, falling back to the
/// current directory when the platform has none.
fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR)
}

/// Returns the platform-specific path for the config file
/// (e.g. `~/.config/league_watch/config.toml` on Linux).
pub fn get_config_path() -> String {
    app_config_dir()
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_config_dir().join("logs").to_string_lossy().to_string()
}
