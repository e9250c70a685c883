use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the welcome channel store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading, writing or renaming the config file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the operation was performed on
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but is not a valid welcome config document.
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        /// File that failed to decode
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory mapping could not be serialized.
    #[error("Failed to encode welcome config: {0}")]
    Encode(#[source] serde_json::Error),
}
