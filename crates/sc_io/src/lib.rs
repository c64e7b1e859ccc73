//! crates/sc_io/src/lib.rs
//! I/O for the settlement calculator. The engine crates stay I/O-free; this
//! crate owns every file touch.
//!
//! - `loader`: local JSON request files → `CalculationRequest`
//! - `canonical_json`: sorted-key compact JSON + atomic file writes
//! - `hasher`: SHA-256 over canonical bytes (`hash` feature)
//! - `record`: the `result.json` record (engine meta + request + result)

#![forbid(unsafe_code)]

use sc_core::ValidationError;
use thiserror::Error;

/// Unified error for sc_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (read, create_dir_all, rename, fsync, ...)
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON serialization/deserialization errors.
    #[error("json error: {0}")]
    Json(String),

    /// Input exceeds the read limit.
    #[error("limit: {0}")]
    Limit(String),

    /// Parsed fine but the form values are not acceptable.
    #[error("invalid request: {0}")]
    Request(#[from] ValidationError),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json(e.to_string())
    }
}

pub mod canonical_json;
#[cfg(feature = "hash")]
pub mod hasher;
pub mod loader;
pub mod record;

/// Returns true if `s` looks like a URL (any `<scheme>://`, including `file://`).
#[inline]
pub fn looks_like_url_strict(s: &str) -> bool {
    s.trim().contains("://")
}
