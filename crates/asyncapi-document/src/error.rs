//! Typed error enum for document loading.
//!
//! Library consumers can match on specific variants. Binaries convert these
//! to `anyhow::Error` at the boundary for richer context messages.

/// Errors produced while loading an AsyncAPI document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// File I/O failure (reading the specification file).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing failure.
    #[error(transparent)]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the library's public API.
pub type Result<T> = std::result::Result<T, Error>;
