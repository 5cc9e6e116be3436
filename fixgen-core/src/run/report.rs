use crate::format::TargetFormat;
use std::path::PathBuf;

/// What happened to one target format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Image written and metadata embedded
    Complete,
    /// Image written, metadata tool failed; the image is kept as is
    MetadataFailed(String),
    /// Nothing usable was written
    SynthesisFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub format: TargetFormat,
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Per-format results of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn push(&mut self, format: TargetFormat, path: PathBuf, outcome: FileOutcome) {
        self.files.push(FileReport {
            format,
            path,
            outcome,
        });
    }

    /// Files that exist on disk, with or without metadata
    pub fn written(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| !matches!(f.outcome, FileOutcome::SynthesisFailed(_)))
    }

    pub fn complete_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == FileOutcome::Complete)
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.files.len() - self.complete_count()
    }

    pub fn outcome(&self, ext: &str) -> Option<&FileOutcome> {
        self.files
            .iter()
            .find(|f| f.format.ext == ext)
            .map(|f| &f.outcome)
    }
}
