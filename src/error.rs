//! Error types

use std::io;
use std::path::PathBuf;

/// Errors raised while generating or reading posts
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Writing a post file failed (missing directory, permissions, full disk)
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading an existing post or config file failed
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid YAML for `GenConfig`
    #[error("invalid config {path:?}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
