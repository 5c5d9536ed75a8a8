//! Crate error type.
//!
//! Board operations never fail; these errors only surface while loading a
//! catalogue, validating configuration, or talking to a session store.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TierError>;

/// Errors raised outside the engine's pure transitions.
#[derive(Error, Debug)]
pub enum TierError {
    /// Configuration or tier table failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two catalogue entries share the same id.
    #[error("Duplicate entity id: {0}")]
    DuplicateEntity(String),

    /// A catalogue entry has a blank id or display name.
    #[error("Invalid entity at position {index}: {reason}")]
    InvalidEntity { index: usize, reason: String },

    /// A string did not name a tier or the pool.
    #[error("Unknown container: {0}")]
    UnknownContainer(String),

    /// Export was requested before the completion policy was met.
    #[error("Export not ready: {0}")]
    NotReady(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Session store I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
