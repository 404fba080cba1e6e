//! Server error types.

use std::path::PathBuf;

/// Errors raised while binding the HTTP server or writing the static page.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `tiny_http` could not listen on the configured address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A payload could not be encoded as JSON.
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// The exported page could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
