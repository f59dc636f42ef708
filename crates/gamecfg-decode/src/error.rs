//! Error types for decoding operations.

use thiserror::Error;

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding cache data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A read ran past the end of the buffer.
    #[error("unexpected end of data at offset {offset}: needed {needed} bytes, {remaining} left")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// An identikit entry carried a field tag with no known payload width.
    #[error("unknown identikit field tag {tag} in entry {id} at offset {offset}")]
    UnknownTag { id: usize, tag: u8, offset: usize },

    /// A slotted field tag named a slot past the end of its array.
    #[error("identikit field tag {tag} in entry {id} at offset {offset} names a missing slot")]
    SlotOutOfRange { id: usize, tag: u8, offset: usize },

    /// The archive body is compressed as a whole.
    #[error("compressed archive ({compressed} -> {decompressed} bytes) is not supported")]
    CompressedArchive { compressed: u32, decompressed: u32 },

    /// A single archive entry is stored compressed.
    #[error("archive entry {name_hash:#010x} is compressed and cannot be read")]
    CompressedEntry { name_hash: i32 },

    /// An archive entry's payload extends past the end of the archive.
    #[error("archive entry {name_hash:#010x} spans {start}..{end} but archive holds {len} bytes")]
    EntryOutOfBounds {
        name_hash: i32,
        start: usize,
        end: usize,
        len: usize,
    },

    /// An entry payload is too large for a 24-bit size field.
    #[error("archive entry {name_hash:#010x} holds {len} bytes, more than a stored entry allows")]
    EntryTooLarge { name_hash: i32, len: usize },

    /// The archive body is too large for a 24-bit size field.
    #[error("archive body of {len} bytes is too large to store")]
    ArchiveTooLarge { len: usize },

    /// More entries than the 16-bit entry count can hold.
    #[error("{count} archive entries exceed the 16-bit entry count")]
    TooManyEntries { count: usize },
}
