//! Error types for icon generation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Icon generation errors
#[derive(Debug, Error)]
pub enum IconError {
    /// An icon directory could not be listed
    #[error("failed to read icon directory {}: {source}", .path.display())]
    ReadDir {
        /// Directory that was being listed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// An icon file could not be read at style time
    #[error("failed to read icon file {}: {source}", .path.display())]
    ReadFile {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A template file or directory could not be read while scanning content
    #[error("failed to read content file {}: {source}", .path.display())]
    ReadContent {
        /// Template path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The theme has no value for a lookup path
    #[error("theme value '{0}' is not defined")]
    MissingThemeValue(String),

    /// Style requested for a name that was never registered
    #[error("no icon '{name}' registered under prefix '{prefix}'")]
    UnknownIcon {
        /// Utility prefix of the set
        prefix: String,
        /// Requested icon name
        name: String,
    },
}

impl IconError {
    /// The raw I/O error, if this failure came from the filesystem
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            IconError::ReadDir { source, .. }
            | IconError::ReadFile { source, .. }
            | IconError::ReadContent { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, IconError>;
