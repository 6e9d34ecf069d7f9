//! Frame completeness detection.
//!
//! A transport layer accumulating bytes from a socket calls
//! [`check_frame`] after every read to learn whether a full frame is
//! present. The check is pure and idempotent: it re-examines the buffer
//! from scratch each time, so it is safe to call repeatedly as bytes
//! trickle in.

use crate::endian::{LengthInt, WireInt};
use crate::header::HeaderLayout;

/// Outcome of a frame completeness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// The buffer holds exactly one complete frame.
    Complete,
    /// The frame is corrupt or exceeds the caller's size policy. Drop the
    /// buffer (and typically the connection); re-checking the same bytes
    /// cannot succeed.
    Invalid,
    /// Not an error: this many more bytes must arrive before the buffer
    /// can be a complete frame.
    NeedMore(usize),
}

impl FrameStatus {
    /// Returns `true` if the buffer holds a complete frame.
    pub fn is_complete(&self) -> bool {
        matches!(self, FrameStatus::Complete)
    }
}

/// Checks whether `buf` holds one complete frame under layout `H`.
///
/// `max_frame_len` is the caller's acceptance policy: any frame claiming
/// to be larger is rejected as [`FrameStatus::Invalid`] before its payload
/// is buffered, which bounds memory committed to a single peer. Use
/// [`DEFAULT_MAX_FRAME_LEN`](crate::DEFAULT_MAX_FRAME_LEN) absent a
/// protocol-specific limit.
pub fn check_frame<H: HeaderLayout>(buf: &[u8], max_frame_len: usize) -> FrameStatus {
    // The length field cannot be decoded until the header is whole.
    if buf.len() < H::HEADER_LEN {
        return FrameStatus::NeedMore(H::HEADER_LEN - buf.len());
    }

    let raw = H::Length::from_wire(H::ENDIAN, &buf[H::PRE_OFFSET..]).to_usize();

    let frame_len = if H::LENGTH_INCLUDES_HEADER {
        raw
    } else {
        // Reconstruct the total in the length field's own width; a value
        // near the field maximum must not wrap into a small total.
        match raw.checked_add(H::HEADER_LEN) {
            Some(total) if total <= H::Length::MAX_LEN => total,
            _ => {
                tracing::warn!(raw_len = raw, "length field overflows its width");
                return FrameStatus::Invalid;
            }
        }
    };

    if frame_len > max_frame_len {
        tracing::warn!(frame_len, max_frame_len, "frame exceeds size limit");
        return FrameStatus::Invalid;
    }
    if frame_len == buf.len() {
        return FrameStatus::Complete;
    }
    if frame_len < buf.len() {
        // More bytes buffered than the frame claims: the stream is
        // desynchronized.
        tracing::warn!(
            frame_len,
            buffered = buf.len(),
            "buffer holds more bytes than the frame claims"
        );
        return FrameStatus::Invalid;
    }
    FrameStatus::NeedMore(frame_len - buf.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endian::Endianness;
    use crate::header::DefaultHeader;
    use crate::DEFAULT_MAX_FRAME_LEN;

    /// Payload-only length count, as protocols with a fixed-size header
    /// tag often use.
    struct ExclusiveHeader;

    impl HeaderLayout for ExclusiveHeader {
        type Length = u16;
        const PRE_OFFSET: usize = 0;
        const POST_OFFSET: usize = 0;
        const LENGTH_INCLUDES_HEADER: bool = false;
        const ENDIAN: Endianness = Endianness::Little;
    }

    #[test]
    fn short_buffer_needs_header() {
        let status = check_frame::<DefaultHeader>(&[0x07], DEFAULT_MAX_FRAME_LEN);
        assert_eq!(status, FrameStatus::NeedMore(1));

        let status = check_frame::<DefaultHeader>(&[], DEFAULT_MAX_FRAME_LEN);
        assert_eq!(status, FrameStatus::NeedMore(2));
    }

    #[test]
    fn worked_example_from_wire_format() {
        // length=7 includes the 2-byte header: u16 0x1234 then "hi".
        let frame = [0x07, 0x00, 0x34, 0x12, 0x02, 0x00, b'h', b'i'];
        // The example frame is 8 bytes but claims 7; the 7-byte prefix is
        // the complete frame described in the wire format docs.
        assert_eq!(
            check_frame::<DefaultHeader>(&frame[..7], DEFAULT_MAX_FRAME_LEN),
            FrameStatus::Complete
        );
        assert_eq!(
            check_frame::<DefaultHeader>(&frame[..5], DEFAULT_MAX_FRAME_LEN),
            FrameStatus::NeedMore(2)
        );
    }

    #[test]
    fn excess_bytes_are_desync() {
        let buf = [0x03, 0x00, 0xAA, 0xBB, 0xCC];
        assert_eq!(
            check_frame::<DefaultHeader>(&buf, DEFAULT_MAX_FRAME_LEN),
            FrameStatus::Invalid
        );
    }

    #[test]
    fn oversized_claim_is_invalid() {
        let buf = [0xFF, 0xFF];
        assert_eq!(check_frame::<DefaultHeader>(&buf, 1024), FrameStatus::Invalid);
    }

    #[test]
    fn exclusive_length_adds_header() {
        // Payload of 3 -> total frame of 5.
        let buf = [0x03, 0x00, 0xAA, 0xBB, 0xCC];
        assert_eq!(
            check_frame::<ExclusiveHeader>(&buf, DEFAULT_MAX_FRAME_LEN),
            FrameStatus::Complete
        );
        assert_eq!(
            check_frame::<ExclusiveHeader>(&buf[..4], DEFAULT_MAX_FRAME_LEN),
            FrameStatus::NeedMore(1)
        );
    }

    #[test]
    fn exclusive_length_near_max_does_not_wrap() {
        // 0xFFFF payload + 2 header bytes overflows u16.
        let buf = [0xFF, 0xFF];
        assert_eq!(
            check_frame::<ExclusiveHeader>(&buf, usize::MAX),
            FrameStatus::Invalid
        );
    }

    #[test]
    fn check_is_idempotent() {
        let buf = [0x07, 0x00, 0x34, 0x12, 0x02];
        let first = check_frame::<DefaultHeader>(&buf, DEFAULT_MAX_FRAME_LEN);
        let second = check_frame::<DefaultHeader>(&buf, DEFAULT_MAX_FRAME_LEN);
        assert_eq!(first, second);
    }

    #[test]
    fn is_complete_helper() {
        assert!(FrameStatus::Complete.is_complete());
        assert!(!FrameStatus::Invalid.is_complete());
        assert!(!FrameStatus::NeedMore(1).is_complete());
    }
}
