//! File-based logging using simplelog
//!
//! stdout carries the command results, so log lines go to a timestamped file
//! in the system temp directory instead.

use simplelog::{Config, ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    std::env::temp_dir().join(format!("nav-cycle-{}.log", timestamp))
}

fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .map(|v| match v.to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        })
        .unwrap_or(LevelFilter::Info)
}

/// Timestamps in local time when the offset is known, UTC otherwise.
fn log_config() -> Config {
    let mut builder = ConfigBuilder::new();
    builder.set_time_format_rfc3339();
    let _ = builder.set_time_offset_to_local();
    builder.build()
}

/// Initialize file-based logging
///
/// Returns the path to the log file.
pub fn init() -> PathBuf {
    let log_file = log_file_path();
    let file = File::create(&log_file).expect("Failed to create log file");

    WriteLogger::init(level_from_env(), log_config(), file).expect("Failed to initialize logger");

    log_file
}
