//! Sequential fixture generation: encode, write, embed metadata

mod report;

pub use report::{FileOutcome, FileReport, RunReport};

use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::{EncodeError, FixtureError, MetadataError, Result};
use crate::format::{TARGETS, TargetFormat};
use crate::metadata::MetadataDictionary;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// Turns a canvas into the bytes of one container format
pub trait CanvasEncoder {
    fn encode(
        &self,
        canvas: &Canvas,
        format: &TargetFormat,
    ) -> std::result::Result<Vec<u8>, EncodeError>;
}

/// Embeds a tag dictionary into an existing file, in place
pub trait MetadataWriter {
    fn write_tags(
        &mut self,
        path: &Path,
        tags: &MetadataDictionary,
    ) -> std::result::Result<(), MetadataError>;

    /// Release any process or handle held by the writer
    fn close(&mut self) -> std::result::Result<(), MetadataError> {
        Ok(())
    }
}

/// Create `dir` and its parents unless it already exists
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| FixtureError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!("Created output directory: {}", dir.display());
    Ok(())
}

/// Drives one fixture run over a fixed list of target formats
pub struct FixtureGenerator<E, W> {
    encoder: E,
    writer: W,
    targets: &'static [TargetFormat],
}

impl<E: CanvasEncoder, W: MetadataWriter> FixtureGenerator<E, W> {
    pub fn new(encoder: E, writer: W) -> Self {
        Self {
            encoder,
            writer,
            targets: &TARGETS,
        }
    }

    /// Replace the default target list
    pub fn with_targets(mut self, targets: &'static [TargetFormat]) -> Self {
        self.targets = targets;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Generate every target, then release the metadata writer.
    ///
    /// Per-file failures are logged and recorded in the report. Only a
    /// failure to prepare the output directory is returned as an error.
    pub fn run(&mut self, config: &Config) -> Result<RunReport> {
        let result = self.generate(config);

        if let Err(e) = self.writer.close() {
            warn!("⚠ Failed to shut down metadata tool: {e}");
        }

        let report = result?;
        info!(
            "✓ Image generation complete! ({} of {} files fully written)",
            report.complete_count(),
            report.files.len()
        );
        Ok(report)
    }

    fn generate(&mut self, config: &Config) -> Result<RunReport> {
        prepare_output_dir(&config.out_dir)?;

        let canvas = Canvas::new(config.width, config.height);
        let tags = MetadataDictionary::for_dimensions(config.width, config.height);
        let mut report = RunReport::default();

        info!("Generating {} images...", self.targets.len());

        for target in self.targets {
            let path = config.output_path(target.ext);

            let outcome = match self.synthesize(&canvas, target, &path) {
                Ok(()) => {
                    info!("✓ Generated image: {}", path.display());
                    match self.writer.write_tags(&path, &tags) {
                        Ok(()) => {
                            info!("✓ EXIF/GPS metadata written to: {}", path.display());
                            FileOutcome::Complete
                        }
                        Err(e) => {
                            warn!("⚠ EXIF not written to {}: {e}", path.display());
                            FileOutcome::MetadataFailed(e.to_string())
                        }
                    }
                }
                Err(e) => {
                    error!("✗ Failed to generate {}: {e}", path.display());
                    FileOutcome::SynthesisFailed(e.to_string())
                }
            };

            report.push(*target, path, outcome);
        }

        Ok(report)
    }

    fn synthesize(&self, canvas: &Canvas, target: &TargetFormat, path: &Path) -> Result<()> {
        let bytes = self.encoder.encode(canvas, target)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Writes the format name as the file body
    struct FakeEncoder;

    impl CanvasEncoder for FakeEncoder {
        fn encode(
            &self,
            canvas: &Canvas,
            format: &TargetFormat,
        ) -> std::result::Result<Vec<u8>, EncodeError> {
            match format.encoder {
                "jpeg" | "tiff" | "webp" | "png" | "gif" => Ok(format!(
                    "{}:{}x{}",
                    format.encoder, canvas.width, canvas.height
                )
                .into_bytes()),
                other => Err(EncodeError::UnsupportedFormat(other.to_string())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingWriter {
        written: Vec<(PathBuf, usize)>,
        fail_ext: Option<&'static str>,
        closed: usize,
    }

    impl MetadataWriter for RecordingWriter {
        fn write_tags(
            &mut self,
            path: &Path,
            tags: &MetadataDictionary,
        ) -> std::result::Result<(), MetadataError> {
            if path.extension().and_then(|e| e.to_str()) == self.fail_ext {
                return Err(MetadataError::NotUpdated {
                    path: path.to_path_buf(),
                });
            }
            self.written.push((path.to_path_buf(), tags.entries().len()));
            Ok(())
        }

        fn close(&mut self) -> std::result::Result<(), MetadataError> {
            self.closed += 1;
            Ok(())
        }
    }

    fn config_in(dir: &Path) -> Config {
        Config {
            filename: "example".to_string(),
            width: 1000,
            height: 300,
            out_dir: dir.join("nested").join("output"),
        }
    }

    #[test]
    fn test_run_writes_all_targets_in_order() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let mut generator = FixtureGenerator::new(FakeEncoder, RecordingWriter::default());

        let report = generator.run(&config).unwrap();

        assert_eq!(report.complete_count(), 5);
        let tagged: Vec<_> = generator
            .writer()
            .written
            .iter()
            .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            tagged,
            ["example.jpg", "example.tiff", "example.webp", "example.png", "example.gif"]
        );
        assert_eq!(generator.writer().closed, 1);

        let body = fs::read_to_string(config.output_path("jpg")).unwrap();
        assert_eq!(body, "jpeg:1000x300");
    }

    #[test]
    fn test_metadata_failure_keeps_image() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let writer = RecordingWriter {
            fail_ext: Some("webp"),
            ..Default::default()
        };
        let mut generator = FixtureGenerator::new(FakeEncoder, writer);

        let report = generator.run(&config).unwrap();

        assert!(matches!(
            report.outcome("webp"),
            Some(FileOutcome::MetadataFailed(_))
        ));
        assert_eq!(report.complete_count(), 4);
        assert!(config.output_path("webp").is_file());
        assert_eq!(generator.writer().written.len(), 4);
    }

    #[test]
    fn test_unsupported_encoder_fails_only_its_iteration() {
        static WITH_UNKNOWN: [TargetFormat; 3] = [
            TargetFormat::new("jpg", "jpeg"),
            TargetFormat::new("bmp", "bitmap"),
            TargetFormat::new("png", "png"),
        ];
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let mut generator = FixtureGenerator::new(FakeEncoder, RecordingWriter::default())
            .with_targets(&WITH_UNKNOWN);

        let report = generator.run(&config).unwrap();

        assert_eq!(
            report.outcome("bmp"),
            Some(&FileOutcome::SynthesisFailed(
                "Encode error: Unsupported format: bitmap".to_string()
            ))
        );
        assert_eq!(report.complete_count(), 2);
        assert!(!config.output_path("bmp").exists());
        assert_eq!(generator.writer().written.len(), 2);
    }

    #[test]
    fn test_closes_writer_when_output_dir_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"file").unwrap();
        let config = Config {
            out_dir: blocker.join("output"),
            ..Config::default()
        };
        let mut generator = FixtureGenerator::new(FakeEncoder, RecordingWriter::default());

        let err = generator.run(&config).unwrap_err();

        assert!(matches!(err, FixtureError::OutputDir { .. }));
        assert_eq!(generator.writer().closed, 1);
        assert!(generator.writer().written.is_empty());
    }

    #[test]
    fn test_second_run_overwrites() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        let mut first = FixtureGenerator::new(FakeEncoder, RecordingWriter::default());
        first.run(&config).unwrap();

        let resized = Config {
            width: 20,
            height: 10,
            ..config.clone()
        };
        let mut second = FixtureGenerator::new(FakeEncoder, RecordingWriter::default());
        let report = second.run(&resized).unwrap();

        assert_eq!(report.complete_count(), 5);
        let body = fs::read_to_string(config.output_path("gif")).unwrap();
        assert_eq!(body, "gif:20x10");
        assert_eq!(fs::read_dir(&config.out_dir).unwrap().count(), 5);
    }

    #[test]
    fn test_prepare_output_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("a").join("b");
        prepare_output_dir(&out).unwrap();
        fs::write(out.join("keep.txt"), b"x").unwrap();
        prepare_output_dir(&out).unwrap();
        assert!(out.join("keep.txt").is_file());
    }
}
