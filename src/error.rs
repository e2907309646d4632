use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a log file
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read log file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
