//! Error types for config loading.

use gamecfg_decode::DecodeError;
use thiserror::Error;

/// Result type for config loading.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading config tables.
#[derive(Debug, Error)]
pub enum Error {
    /// The archive or one of its entries failed to decode.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The archive has no entry with the requested name.
    #[error("archive has no entry named {name:?}")]
    MissingEntry { name: String },
}
