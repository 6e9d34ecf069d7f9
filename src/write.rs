//! Outgoing frame serialization.

use crate::endian::{LengthInt, RawValue, WireInt};
use crate::header::HeaderLayout;
use bytes::{BufMut, Bytes, BytesMut};
use std::marker::PhantomData;

/// Serializes one outgoing frame field by field.
///
/// The stream reserves zero-filled header space up front and keeps the
/// length field current after every append, so the buffer is frame-ready
/// at whatever point the caller stops writing; there is no separate
/// finalize step. Write methods return `&mut Self` for chaining:
///
/// ```
/// use framepack::{DefaultHeader, WriteStream};
///
/// let mut frame = WriteStream::<DefaultHeader>::new();
/// frame.write_int(0x1234u16).write_str("hi");
/// assert_eq!(frame.len(), 8);
/// ```
///
/// Appends cannot fail; a frame that outgrows the length field's width is
/// a protocol contract violation the receive side rejects via
/// [`check_frame`](crate::check_frame).
#[derive(Debug)]
pub struct WriteStream<H: HeaderLayout> {
    buf: BytesMut,
    cursor: usize,
    _layout: PhantomData<H>,
}

impl<H: HeaderLayout> WriteStream<H> {
    pub fn new() -> Self {
        let mut buf = BytesMut::with_capacity(H::HEADER_LEN + 64);
        buf.put_bytes(0, H::HEADER_LEN);
        let mut stream = Self {
            buf,
            cursor: H::HEADER_LEN,
            _layout: PhantomData,
        };
        stream.fix_len();
        stream
    }

    /// Re-encodes the length field to match the current frame size.
    fn fix_len(&mut self) {
        let mut frame_len = self.cursor;
        if !H::LENGTH_INCLUDES_HEADER {
            frame_len -= H::HEADER_LEN;
        }
        H::Length::from_usize(frame_len).put_wire(H::ENDIAN, &mut self.buf[H::PRE_OFFSET..]);
    }

    /// Appends a fixed-width integer in wire byte order.
    pub fn write_int<T: WireInt>(&mut self, value: T) -> &mut Self {
        let mut scratch = [0u8; 8];
        value.put_wire(H::ENDIAN, &mut scratch);
        self.buf.put_slice(&scratch[..T::WIDTH]);
        self.cursor += T::WIDTH;
        self.fix_len();
        self
    }

    /// Appends a boolean, byte, or floating-point value in host layout,
    /// with no byte-order conversion.
    pub fn write_raw<T: RawValue>(&mut self, value: T) -> &mut Self {
        let mut scratch = [0u8; 8];
        value.put_host(&mut scratch);
        self.buf.put_slice(&scratch[..T::WIDTH]);
        self.cursor += T::WIDTH;
        self.fix_len();
        self
    }

    /// Appends an opaque content block whose length the peer knows from
    /// elsewhere in the protocol.
    pub fn write_bytes(&mut self, data: &[u8]) -> &mut Self {
        self.buf.put_slice(data);
        self.cursor += data.len();
        self.fix_len();
        self
    }

    /// Appends a length-prefixed string: the byte length as a wire-order
    /// integer of the layout's length type, then the raw bytes.
    pub fn write_str(&mut self, text: &str) -> &mut Self {
        self.write_int(H::Length::from_usize(text.len()));
        self.write_bytes(text.as_bytes())
    }

    /// The complete frame produced so far, header first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Current frame size in bytes, header included.
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if no fields have been written yet.
    pub fn is_empty(&self) -> bool {
        self.cursor == H::HEADER_LEN
    }

    /// The header region, including the current length field.
    pub fn header_bytes(&self) -> &[u8] {
        &self.buf[..H::HEADER_LEN]
    }

    /// Consumes the stream, yielding the finished frame without copying.
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}

impl<H: HeaderLayout> Default for WriteStream<H> {
    fn default() -> Self {
        Self::new()
    }
}
