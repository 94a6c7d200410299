//! Error types for updater-core

use std::path::PathBuf;

/// Result type for updater-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, updating, or saving a template
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Template file not found at the expected path
    #[error("Template not found at {path}")]
    TemplateNotFound { path: PathBuf },

    /// Template content is not well-formed YAML
    #[error("Failed to parse YAML template at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Reading the template failed for a reason other than absence
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the updated template back failed
    #[error("Failed to write template at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
