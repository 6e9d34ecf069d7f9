//! Incoming frame decoding.

use crate::endian::{LengthInt, RawValue, WireInt};
use crate::error::ReadError;
use crate::header::HeaderLayout;
use std::marker::PhantomData;

/// Decodes one complete frame field by field.
///
/// The stream borrows a buffer owned by the transport layer (which must
/// stay valid and unmodified for the stream's lifetime) and consumes
/// fields in the exact order they were written. Every operation is
/// bounds-checked against the declared frame length and returns a
/// [`ReadError`] rather than reading out of range; hand the buffer to
/// [`check_frame`](crate::check_frame) first so only certified-complete
/// frames reach this point.
#[derive(Debug)]
pub struct ReadStream<'a, H: HeaderLayout> {
    data: &'a [u8],
    cursor: usize,
    _layout: PhantomData<H>,
}

impl<'a, H: HeaderLayout> ReadStream<'a, H> {
    /// Opens a stream over one complete frame, positioned at the first
    /// payload field (just past the header).
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            cursor: H::HEADER_LEN,
            _layout: PhantomData,
        }
    }

    fn check_advance(&self, unit: usize) -> Result<(), ReadError> {
        if self.cursor >= self.data.len() {
            return Err(ReadError::Exhausted);
        }
        if unit > self.data.len() {
            return Err(ReadError::UnitTooLarge {
                requested: unit,
                frame_len: self.data.len(),
            });
        }
        if self.data.len() - self.cursor < unit {
            return Err(ReadError::Insufficient {
                requested: unit,
                remaining: self.data.len() - self.cursor,
            });
        }
        Ok(())
    }

    /// Reads a fixed-width integer encoded in wire byte order.
    pub fn read_int<T: WireInt>(&mut self) -> Result<T, ReadError> {
        self.check_advance(T::WIDTH)?;
        let value = T::from_wire(H::ENDIAN, &self.data[self.cursor..]);
        self.cursor += T::WIDTH;
        Ok(value)
    }

    /// Reads a boolean, byte, or floating-point value stored in host
    /// layout, with no byte-order conversion.
    pub fn read_raw<T: RawValue>(&mut self) -> Result<T, ReadError> {
        self.check_advance(T::WIDTH)?;
        let value = T::from_host(&self.data[self.cursor..]);
        self.cursor += T::WIDTH;
        Ok(value)
    }

    /// Returns a view of the next `len` bytes without advancing.
    pub fn peek_bytes(&self, len: usize) -> Result<&'a [u8], ReadError> {
        self.check_advance(len)?;
        Ok(&self.data[self.cursor..self.cursor + len])
    }

    /// Advances past `len` bytes without copying them.
    pub fn skip_bytes(&mut self, len: usize) -> Result<(), ReadError> {
        self.check_advance(len)?;
        self.cursor += len;
        Ok(())
    }

    /// Reads `len` bytes into an owned buffer.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, ReadError> {
        let bytes = self.peek_bytes(len)?.to_vec();
        self.cursor += len;
        Ok(bytes)
    }

    /// Reads exactly `dst.len()` bytes into caller-supplied storage.
    pub fn read_bytes_into(&mut self, dst: &mut [u8]) -> Result<(), ReadError> {
        dst.copy_from_slice(self.peek_bytes(dst.len())?);
        self.cursor += dst.len();
        Ok(())
    }

    /// Reads a length-prefixed string written by
    /// [`WriteStream::write_str`](crate::WriteStream::write_str).
    pub fn read_str(&mut self) -> Result<String, ReadError> {
        let len = self.read_int::<H::Length>()?.to_usize();
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes).map_err(|_| ReadError::InvalidUtf8)
    }

    /// Current read offset from the start of the frame, header included.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Bytes left to consume.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.cursor)
    }

    /// Total frame length as declared at construction.
    pub fn frame_len(&self) -> usize {
        self.data.len()
    }
}
