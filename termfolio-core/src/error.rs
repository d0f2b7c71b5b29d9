use std::path::PathBuf;
use thiserror::Error;

/// Process-level failures. Command mistakes never end up here; they are
/// printed as error lines in the transcript.
#[derive(Debug, Error)]
pub enum TermfolioError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TermfolioError>;
