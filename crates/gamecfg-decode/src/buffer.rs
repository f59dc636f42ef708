//! Big-endian byte cursor.

use crate::error::{DecodeError, DecodeResult};

/// Read cursor over an in-memory byte slice.
///
/// All multi-byte values are big-endian. Reads are bounds checked; a read
/// that would run past the end fails without moving the cursor.
#[derive(Debug, Clone)]
pub struct Buffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Buffer<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read offset from the start of the slice.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, n: usize) -> DecodeResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(DecodeError::UnexpectedEof {
                offset: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let data = self.data;
        let bytes = &data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Read an unsigned byte.
    pub fn g1(&mut self) -> DecodeResult<u8> {
        Ok(self.take_array::<1>()?[0])
    }

    /// Read an unsigned 16-bit value.
    pub fn g2(&mut self) -> DecodeResult<u16> {
        Ok(u16::from_be_bytes(self.take_array()?))
    }

    /// Read an unsigned 24-bit value.
    pub fn g3(&mut self) -> DecodeResult<u32> {
        let [a, b, c] = self.take_array()?;
        Ok(u32::from_be_bytes([0, a, b, c]))
    }

    /// Read a signed 32-bit value.
    pub fn g4(&mut self) -> DecodeResult<i32> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }

    /// Fill `out` with the next `out.len()` bytes.
    pub fn read_into(&mut self, out: &mut [u8]) -> DecodeResult<()> {
        out.copy_from_slice(self.take(out.len())?);
        Ok(())
    }

    /// Borrow the next `n` bytes without copying.
    pub fn read_slice(&mut self, n: usize) -> DecodeResult<&'a [u8]> {
        self.take(n)
    }

    pub fn skip(&mut self, n: usize) -> DecodeResult<()> {
        self.take(n).map(|_| ())
    }
}
