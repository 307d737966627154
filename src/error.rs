//! Error types for artifact fetching

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Boxed transport failure, so fake transports can report errors too
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every way a fetch run can fail
///
/// None of these are recovered from; the first one aborts the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: StatusCode },

    #[error("unexpected response from {url}: {reason}")]
    Data { url: String, reason: String },

    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("invalid manifest {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl FetchError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = FetchError> = std::result::Result<T, E>;
