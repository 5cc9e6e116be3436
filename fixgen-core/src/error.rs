use std::path::PathBuf;
use thiserror::Error;

/// Errors that can stop a fixture run or a single fixture file
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Cannot prepare output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a configuration file could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Codec error: {0}")]
    Codec(String),
}

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Metadata tool could not be started: {0}")]
    ToolNotFound(String),

    #[error("Metadata tool reported an error: {message}")]
    ToolProcess { message: String, stderr: String },

    #[error("Metadata tool left {} unchanged", path.display())]
    NotUpdated { path: PathBuf },

    #[error("Metadata tool process terminated unexpectedly")]
    ProcessTerminated,
}

pub type Result<T> = std::result::Result<T, FixtureError>;
