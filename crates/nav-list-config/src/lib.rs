//! Configuration for nav-list
//!
//! This crate provides:
//! - Config file lookup (CWD, config directory, home directory)
//! - Named list presets describing items, default and boundary mode
//! - Built-in presets such as zoom levels

pub mod config_file;
pub mod nav_config;
pub mod preset;

pub use config_file::{config_dir_path, load_config_file, CONFIG_FILE};
pub use nav_config::{NavConfig, ZOOM_PRESET};
pub use preset::ListPreset;
