//! Archive container unpacking.
//!
//! # Format
//!
//! All values are big-endian.
//!
//! - `u24` decompressed size, `u24` compressed size of the body
//! - `u16` entry count
//! - Per entry: `i32` name hash, `u24` decompressed size, `u24` compressed size
//! - Entry payloads, back to back in header order
//!
//! A body or entry whose two sizes differ is compressed. Only stored
//! (uncompressed) data can be read.

use crate::buffer::Buffer;
use crate::error::{DecodeError, DecodeResult};

const HEADER_LEN: usize = 6;
const ENTRY_HEADER_LEN: usize = 10;

/// Hash an entry name the way archive headers store it.
///
/// Names are case-insensitive.
#[must_use]
pub fn name_hash(name: &str) -> i32 {
    name.bytes().fold(0i32, |hash, b| {
        hash.wrapping_mul(61)
            .wrapping_add(i32::from(b.to_ascii_uppercase()))
            .wrapping_sub(32)
    })
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    name_hash: i32,
    decompressed: u32,
    compressed: u32,
    offset: usize,
}

/// A parsed archive borrowing its backing bytes.
#[derive(Debug, Clone)]
pub struct Archive<'a> {
    data: &'a [u8],
    entries: Vec<Entry>,
}

impl<'a> Archive<'a> {
    /// Parse an archive header and validate entry bounds.
    pub fn parse(data: &'a [u8]) -> DecodeResult<Self> {
        let mut buf = Buffer::new(data);
        let decompressed = buf.g3()?;
        let compressed = buf.g3()?;
        if decompressed != compressed {
            return Err(DecodeError::CompressedArchive {
                compressed,
                decompressed,
            });
        }

        let body = &data[HEADER_LEN..];
        let mut buf = Buffer::new(body);
        let count = usize::from(buf.g2()?);
        let mut offset = 2 + count * ENTRY_HEADER_LEN;
        let mut entries = Vec::with_capacity(count);

        for _ in 0..count {
            let name_hash = buf.g4()?;
            let decompressed = buf.g3()?;
            let compressed = buf.g3()?;
            let end = offset + compressed as usize;
            if end > body.len() {
                return Err(DecodeError::EntryOutOfBounds {
                    name_hash,
                    start: offset,
                    end,
                    len: body.len(),
                });
            }
            entries.push(Entry {
                name_hash,
                decompressed,
                compressed,
                offset,
            });
            offset = end;
        }

        Ok(Self {
            data: body,
            entries,
        })
    }

    /// Number of entries in the archive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    fn find(&self, name: &str) -> Option<&Entry> {
        let hash = name_hash(name);
        self.entries.iter().find(|e| e.name_hash == hash)
    }

    /// Look up an entry's payload by name.
    ///
    /// Returns `Ok(None)` when no entry has that name.
    pub fn entry(&self, name: &str) -> DecodeResult<Option<&'a [u8]>> {
        let Some(entry) = self.find(name) else {
            return Ok(None);
        };
        if entry.compressed != entry.decompressed {
            return Err(DecodeError::CompressedEntry {
                name_hash: entry.name_hash,
            });
        }
        let data = self.data;
        Ok(Some(
            &data[entry.offset..entry.offset + entry.compressed as usize],
        ))
    }
}

/// Largest size a 24-bit size field can hold.
pub const MAX_STORED_LEN: usize = (1 << 24) - 1;

/// Build an archive with every entry stored uncompressed.
///
/// Fails if there are more than `u16::MAX` entries, or if a payload or the
/// whole body does not fit a 24-bit size field.
pub fn write_stored(entries: &[(&str, &[u8])]) -> DecodeResult<Vec<u8>> {
    let count = u16::try_from(entries.len()).map_err(|_| DecodeError::TooManyEntries {
        count: entries.len(),
    })?;

    let mut body = Vec::new();
    body.extend_from_slice(&count.to_be_bytes());
    for (name, payload) in entries {
        let name_hash = name_hash(name);
        let len = stored_len(payload.len()).ok_or(DecodeError::EntryTooLarge {
            name_hash,
            len: payload.len(),
        })?;
        body.extend_from_slice(&name_hash.to_be_bytes());
        put_u24(&mut body, len);
        put_u24(&mut body, len);
    }
    for (_, payload) in entries {
        body.extend_from_slice(payload);
    }

    let body_len =
        stored_len(body.len()).ok_or(DecodeError::ArchiveTooLarge { len: body.len() })?;
    let mut out = Vec::with_capacity(HEADER_LEN + body.len());
    put_u24(&mut out, body_len);
    put_u24(&mut out, body_len);
    out.extend_from_slice(&body);
    Ok(out)
}

fn stored_len(len: usize) -> Option<u32> {
    if len > MAX_STORED_LEN {
        return None;
    }
    u32::try_from(len).ok()
}

fn put_u24(out: &mut Vec<u8>, value: u32) {
    debug_assert!(value as usize <= MAX_STORED_LEN);
    out.extend_from_slice(&value.to_be_bytes()[1..]);
}
