use crate::error::{Result, WriterError};
use exiftool::ExifTool;
use fixgen_core::{MetadataDictionary, MetadataError, MetadataWriter};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Embeds fixture tags through one persistent exiftool process
#[derive(Debug)]
pub struct ExifToolWriter {
    tool: Option<ExifTool>,
}

impl ExifToolWriter {
    /// Start `exiftool` from `PATH`
    pub fn new() -> Result<Self> {
        Ok(Self {
            tool: Some(ExifTool::new()?),
        })
    }

    pub fn with_executable(executable: &Path) -> Result<Self> {
        debug!("Starting exiftool from {}", executable.display());
        Ok(Self {
            tool: Some(ExifTool::with_executable(executable)?),
        })
    }

    fn tool(&mut self) -> Result<&mut ExifTool> {
        self.tool.as_mut().ok_or(WriterError::Closed)
    }

    /// Write `tags` into `path` in place and return how many files exiftool updated
    pub fn write(&mut self, path: &Path, tags: &MetadataDictionary) -> Result<usize> {
        let path_arg = path.to_string_lossy().into_owned();
        let assignments = tags.to_assignments();

        let mut args = Vec::with_capacity(assignments.len() + 2);
        args.push("-overwrite_original");
        args.extend(assignments.iter().map(String::as_str));
        args.push(path_arg.as_str());
        ensure_single_line(&args)?;

        let output = String::from_utf8(self.tool()?.execute_raw(&args)?)?;
        updated_count(&output).ok_or_else(|| WriterError::UnexpectedOutput(path_arg.clone()))
    }

    /// Read selected tags back, as numbers where possible (`-n`)
    pub fn read_tags(&mut self, path: &Path, tags: &[&str]) -> Result<Map<String, Value>> {
        let path_arg = path.to_string_lossy().into_owned();
        let tag_args: Vec<String> = tags.iter().map(|t| format!("-{t}")).collect();

        let mut args = vec!["-n"];
        args.extend(tag_args.iter().map(String::as_str));
        ensure_single_line(&args)?;
        ensure_single_line(&[path_arg.as_str()])?;

        match self.tool()?.json(path, &args)? {
            Value::Object(map) => Ok(map),
            _ => Err(WriterError::UnexpectedOutput(path_arg)),
        }
    }

    /// Leave stay-open mode; the process is killed and reaped even if that fails
    pub fn close(&mut self) -> Result<()> {
        let Some(mut tool) = self.tool.take() else {
            return Ok(());
        };
        let result = tool.close();
        drop(tool);
        debug!("exiftool shut down");
        Ok(result?)
    }
}

impl MetadataWriter for ExifToolWriter {
    fn write_tags(
        &mut self,
        path: &Path,
        tags: &MetadataDictionary,
    ) -> std::result::Result<(), MetadataError> {
        match self.write(path, tags)? {
            0 => Err(MetadataError::NotUpdated {
                path: path.to_path_buf(),
            }),
            _ => Ok(()),
        }
    }

    fn close(&mut self) -> std::result::Result<(), MetadataError> {
        ExifToolWriter::close(self).map_err(Into::into)
    }
}

/// Each argument is one line of exiftool's `-@ -` argument stream
fn ensure_single_line(args: &[&str]) -> Result<()> {
    match args.iter().find(|arg| arg.contains(['\n', '\r'])) {
        Some(arg) => Err(WriterError::MultiLineArgument((*arg).to_string())),
        None => Ok(()),
    }
}

/// Parse the "N image files updated" summary line
fn updated_count(output: &str) -> Option<usize> {
    output.lines().find_map(|line| {
        line.trim()
            .strip_suffix("image files updated")
            .and_then(|count| count.trim().parse().ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updated_count() {
        assert_eq!(updated_count("    1 image files updated\n"), Some(1));
        assert_eq!(
            updated_count("    0 image files updated\n    1 image files unchanged\n"),
            Some(0)
        );
        assert_eq!(updated_count("Nothing to do.\n"), None);
    }

    #[test]
    fn test_ensure_single_line() {
        assert!(ensure_single_line(&["-Make=TestCamera", "out/example.jpg"]).is_ok());
        assert!(matches!(
            ensure_single_line(&["out/a\n-execute.jpg"]),
            Err(WriterError::MultiLineArgument(arg)) if arg == "out/a\n-execute.jpg"
        ));
        assert!(ensure_single_line(&["out/a\r.jpg"]).is_err());
    }

    #[test]
    fn test_missing_executable() {
        let err = ExifToolWriter::with_executable(Path::new("/nonexistent/bin/exiftool"))
            .unwrap_err();
        let meta: MetadataError = err.into();
        assert!(matches!(meta, MetadataError::ToolNotFound(_)));
    }
}
