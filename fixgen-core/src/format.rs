//! Container formats produced for every fixture run

/// A file extension paired with the encoder that produces it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetFormat {
    pub ext: &'static str,
    pub encoder: &'static str,
}

impl TargetFormat {
    pub const fn new(ext: &'static str, encoder: &'static str) -> Self {
        Self { ext, encoder }
    }
}

/// Formats generated on every run, in generation order
pub static TARGETS: [TargetFormat; 5] = [
    TargetFormat::new("jpg", "jpeg"),
    TargetFormat::new("tiff", "tiff"),
    TargetFormat::new("webp", "webp"),
    TargetFormat::new("png", "png"),
    TargetFormat::new("gif", "gif"),
];
