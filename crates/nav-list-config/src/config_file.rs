use std::{env, path::PathBuf};

pub const CONFIG_FILE: &str = ".nav-list.toml";

const APP_NAME: &str = "nav-list";

/// Load config file content
///
/// Searches for the config in:
/// 1. Current working directory as .nav-list.toml
/// 2. Config directory as nav-list/config.toml
/// 3. Home directory as .nav-list.toml
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    for path in [config_dir_path(), get_home_config_path()].into_iter().flatten() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}

/// Get the path to the config file in the platform config directory
///
/// Returns ~/.config/nav-list/config.toml on Linux.
pub fn config_dir_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
}

/// Returns ~/.nav-list.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
