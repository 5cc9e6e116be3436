//! Run configuration: JSON file merged over built-in defaults

mod resolve;

pub use resolve::{PartialConfig, resolve_fields};

use crate::error::ConfigError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub const DEFAULT_FILENAME: &str = "example";
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_OUT_DIR: &str = "./output";

/// Fully resolved settings for one fixture run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Base name shared by every generated file
    pub filename: String,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "outDir")]
    pub out_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl Config {
    /// Path of the fixture written for `ext`
    pub fn output_path(&self, ext: &str) -> PathBuf {
        self.out_dir.join(format!("{}.{}", self.filename, ext))
    }
}

/// Resolve the run configuration from an optional JSON file.
///
/// Never fails: a missing file, unreadable file or malformed JSON all
/// produce the defaults, and individual bad fields fall back one by one.
pub fn resolve(path: Option<&Path>) -> Config {
    let config = match path.filter(|p| p.exists()) {
        Some(path) => match load_from_path(path) {
            Ok(partial) => {
                info!("Loaded configuration from: {}", path.display());
                resolve_fields(partial)
            }
            Err(e) => {
                error!("Failed to parse config JSON, using defaults: {e}");
                Config::default()
            }
        },
        None => {
            info!("No configuration file provided or file not found, using defaults.");
            Config::default()
        }
    };

    match serde_json::to_string(&config) {
        Ok(json) => info!("Configuration: {json}"),
        Err(_) => info!("Configuration: {config:?}"),
    }
    config
}

/// Read and parse a configuration file without applying defaults
pub fn load_from_path(path: &Path) -> Result<PartialConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}
