//! Error type shared by the fm core, workers and config loader.
//!
//! Nothing in here is fatal once the terminal is running: workers turn every
//! [FmError] into a message which the status line displays.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by directory listing, file operations and config loading.
#[derive(Debug, Error)]
pub enum FmError {
    /// I/O failure on a specific path.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The target of a rename or move is already taken.
    #[error("'{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// A new entry name that would leave the current directory.
    #[error("invalid name '{0}'")]
    InvalidName(String),

    /// Moving an item to the system trash failed.
    #[error("trash error: {0}")]
    Trash(#[from] trash::Error),

    /// fm.toml could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// fm.toml exists but could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FmError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FmError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type FmResult<T> = Result<T, FmError>;
