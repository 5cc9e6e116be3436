use exiftool::ExifToolError;
use fixgen_core::MetadataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error(transparent)]
    Tool(#[from] ExifToolError),

    #[error("refusing multi-line exiftool argument: {0:?}")]
    MultiLineArgument(String),

    #[error("exiftool I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("exiftool output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("unexpected exiftool output for {0}")]
    UnexpectedOutput(String),

    #[error("exiftool has already been shut down")]
    Closed,
}

pub type Result<T> = std::result::Result<T, WriterError>;

impl From<WriterError> for MetadataError {
    fn from(err: WriterError) -> Self {
        match err {
            WriterError::Tool(ExifToolError::ExifToolNotFound(e)) => {
                MetadataError::ToolNotFound(e.to_string())
            }
            WriterError::Tool(ExifToolError::ExifToolProcess {
                message, std_err, ..
            }) => MetadataError::ToolProcess {
                message,
                stderr: std_err,
            },
            WriterError::Tool(
                ExifToolError::ProcessTerminated | ExifToolError::StderrDisconnected,
            )
            | WriterError::Closed => MetadataError::ProcessTerminated,
            other => MetadataError::ToolProcess {
                message: other.to_string(),
                stderr: String::new(),
            },
        }
    }
}
