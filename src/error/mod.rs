//! Error types and handling infrastructure for CSV to JSON conversion

use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {message}")]
    Serialize { message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConvertError {
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        Self::Read { path, source }
    }

    pub fn write(path: PathBuf, source: std::io::Error) -> Self {
        Self::Write { path, source }
    }

    pub fn list_directory(path: PathBuf, source: std::io::Error) -> Self {
        Self::ListDirectory { path, source }
    }

    pub fn serialize(message: String) -> Self {
        Self::Serialize { message }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Read { path, source } => {
                format!("Could not read '{}': {}", path.display(), source)
            }
            Self::Write { path, source } => {
                format!("Could not write '{}': {}", path.display(), source)
            }
            Self::ListDirectory { path, source } => {
                format!("Could not list directory '{}': {}", path.display(), source)
            }
            Self::Serialize { message } => {
                format!("Could not serialize rows to JSON: {}", message)
            }
            Self::Configuration { message } => {
                format!("Invalid configuration: {}", message)
            }
        }
    }

    /// Whether this error aborts the whole run (directory listing,
    /// configuration) as opposed to being recoverable per file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ListDirectory { .. } | Self::Configuration { .. })
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
