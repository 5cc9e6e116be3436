//! Concrete encoder and metadata tool behind the fixture pipeline

pub mod encoder;
pub mod error;
pub mod metadata;

pub use encoder::ImageEncoder;
pub use error::WriterError;
pub use metadata::ExifToolWriter;
