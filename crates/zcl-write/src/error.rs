//! Error types for token writing operations

use crate::lexeme::LayoutError;
use crate::writer::WriteError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the writer crate
#[derive(Debug, Error)]
pub enum ZclError {
    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lexer output that cannot be turned into a lossless token run
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The output sink failed during serialization
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Io,
    Layout,
    Write,
}

impl ZclError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZclError::ConfigError { .. } => ErrorKind::Config,
            ZclError::IoError { .. } => ErrorKind::Io,
            ZclError::Layout(_) => ErrorKind::Layout,
            ZclError::Write(_) => ErrorKind::Write,
        }
    }

    /// Whether the caller can keep going with other documents
    ///
    /// A failed write leaves the tree intact, so it can be retried or sent
    /// to another sink; bad configuration cannot be worked around.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Layout | ErrorKind::Write)
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_kinds() {
        assert_eq!(ZclError::config_error("bad").kind(), ErrorKind::Config);
        assert_eq!(
            ZclError::io_error("zcl.json", io::Error::from(io::ErrorKind::NotFound)).kind(),
            ErrorKind::Io
        );

        let write = ZclError::from(WriteError {
            written: 3,
            source: io::Error::from(io::ErrorKind::BrokenPipe),
        });
        assert_eq!(write.kind(), ErrorKind::Write);
        assert!(write.is_recoverable());
        assert!(write.to_string().contains("after 3 bytes"));
    }

    #[test]
    fn test_config_errors_are_fatal() {
        assert!(!ZclError::config_error("bad").is_recoverable());
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = ZclError::io_error("/tmp/zcl.json", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().contains("/tmp/zcl.json"));
    }
}
