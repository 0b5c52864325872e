//! Error types and handling for stratcp
//!
//! Every copy strategy reports failures through the [`Error`] enum defined
//! here. The taxonomy distinguishes bad input (rejected before any I/O
//! happens) from runtime I/O failures so that callers can decide whether to
//! retry, prompt, or abort.

use std::path::PathBuf;

/// Main error type for stratcp operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required path argument was empty
    #[error("Missing argument: parameter '{param}' is empty")]
    MissingArgument {
        /// Name of the parameter that was empty
        param: &'static str,
    },

    /// The source path does not name an existing file
    #[error("Source file '{path}' not found (parameter '{param}')")]
    SourceNotFound {
        /// Path that failed to resolve to a file
        path: PathBuf,
        /// Name of the parameter holding the path
        param: &'static str,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message from the I/O operation
        message: String,
    },

    /// File content is not valid UTF-8
    #[error("Encoding error: {message}")]
    Encoding {
        /// Error message describing the decoding failure
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input was rejected before any I/O was attempted
    InvalidInput,
    /// I/O related errors
    Io,
    /// Text decoding errors
    Encoding,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } | Self::SourceNotFound { .. } => ErrorKind::InvalidInput,
            Self::Io { .. } => ErrorKind::Io,
            Self::Encoding { .. } => ErrorKind::Encoding,
        }
    }

    /// Check whether this error was caused by bad input rather than a
    /// runtime I/O failure. Invalid-input errors are raised before any
    /// file handle is opened, so no destination file is created.
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    /// Create a new missing-argument error
    pub fn missing_argument(param: &'static str) -> Self {
        Self::MissingArgument { param }
    }

    /// Create a new source-not-found error
    pub fn source_not_found(path: impl Into<PathBuf>, param: &'static str) -> Self {
        Self::SourceNotFound {
            path: path.into(),
            param,
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a new encoding error
    pub fn encoding<S: Into<String>>(message: S) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(error: std::str::Utf8Error) -> Self {
        Self::Encoding {
            message: error.to_string(),
        }
    }
}
