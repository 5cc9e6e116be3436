//! EXIF and GPS tags embedded into every fixture

mod tags;

pub use tags::{CAPTURE_TIME, EXIF_TAGS, GPS_TAGS};

use std::fmt;

/// A literal tag value as handed to the metadata tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TagValue {
    Text(&'static str),
    Integer(u32),
    Real(f64),
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Text(s) => f.write_str(s),
            TagValue::Integer(n) => write!(f, "{n}"),
            TagValue::Real(x) => write!(f, "{x}"),
        }
    }
}

/// Ordered tag/value pairs written into each generated file
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataDictionary {
    entries: Vec<(&'static str, TagValue)>,
}

impl MetadataDictionary {
    /// Fixed EXIF tags, pixel dimensions for this run, then the GPS fix
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        let entries = EXIF_TAGS
            .iter()
            .copied()
            .chain([
                ("PixelXDimension", TagValue::Integer(width)),
                ("PixelYDimension", TagValue::Integer(height)),
            ])
            .chain(GPS_TAGS.iter().copied())
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(&'static str, TagValue)] {
        &self.entries
    }

    pub fn get(&self, tag: &str) -> Option<TagValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, value)| *value)
    }

    /// Render as `-TAG=VALUE` assignments understood by exiftool
    pub fn to_assignments(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(tag, value)| format!("-{tag}={value}"))
            .collect()
    }
}
