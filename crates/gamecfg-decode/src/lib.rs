//! Decode archive containers and tagged config entries from the game client cache.
//!
//! This crate provides pure synchronous decoding functions over byte slices
//! that are already in memory. It performs no I/O and no logging; callers
//! decide how to report errors.
//!
//! # Key functions
//!
//! - [`Archive::parse`]: Read an archive header and locate named entries
//! - [`decode_identikits`]: Decode the identikit (appearance kit) table
//! - [`Buffer`]: Big-endian byte cursor used by every decoder

mod buffer;
mod error;

pub mod archive;
pub mod identikit;

pub use archive::{Archive, MAX_STORED_LEN, name_hash, write_stored};
pub use buffer::Buffer;
pub use error::{DecodeError, DecodeResult};
pub use identikit::{BodyPart, HEAD_MODEL_SLOTS, IdentikitDef, RECOLOR_SLOTS, decode_identikits};

/// Archive entry holding the identikit table.
pub const IDENTIKIT_ENTRY: &str = "idk.dat";
