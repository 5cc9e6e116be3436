pub mod canvas;
pub mod config;
pub mod error;
pub mod format;
pub mod metadata;
pub mod run;

pub use canvas::Canvas;
pub use config::Config;
pub use error::{ConfigError, EncodeError, FixtureError, MetadataError, Result};
pub use format::{TARGETS, TargetFormat};
pub use metadata::{MetadataDictionary, TagValue};
pub use run::{CanvasEncoder, FileOutcome, FixtureGenerator, MetadataWriter, RunReport};
