use std::path::PathBuf;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, WindowError>;
/// Coarse classification of a [`WindowError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidConfiguration,
    Exhausted,
    Unsupported,
    /// The source exists but could not be read or decoded.
    Source,
}
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("{}: does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("signal has no channels")]
    EmptySignal,
    #[error("channel length mismatch: channel {channel} has {actual} samples, expected {expected}")]
    ChannelLengthMismatch {
        channel: usize,
        expected: usize,
        actual: usize,
    },
    #[error("no windows left in this epoch; call reset() to start a new one")]
    Exhausted,
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),
    #[error("failed to read signal: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse signal at line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("failed to decode signal document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to shape signal buffer: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
impl WindowError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WindowError::NotFound(_) => ErrorKind::NotFound,
            WindowError::InvalidConfiguration(_)
            | WindowError::EmptySignal
            | WindowError::ChannelLengthMismatch { .. } => ErrorKind::InvalidConfiguration,
            WindowError::Exhausted => ErrorKind::Exhausted,
            WindowError::Unsupported(_) => ErrorKind::Unsupported,
            WindowError::Io(_)
            | WindowError::Parse { .. }
            | WindowError::Json(_)
            | WindowError::Shape(_) => ErrorKind::Source,
        }
    }
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        WindowError::InvalidConfiguration(message.into())
    }
}
