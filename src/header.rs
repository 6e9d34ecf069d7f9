//! Frame header geometry.
//!
//! Header layout (all widths fixed per [`HeaderLayout`] implementation):
//!
//! ```text
//! +--------------+--------------------+--------------+----------------+
//! | pre-offset   | length field       | post-offset  | payload        |
//! | PRE_OFFSET   | size_of::<Length>  | POST_OFFSET  | ...            |
//! +--------------+--------------------+--------------+----------------+
//! ```
//!
//! The pre- and post-offset regions are opaque to the codec: reserved
//! space for protocol markers, checksums, or message-type tags that a
//! higher layer fills in.

use crate::endian::{Endianness, LengthInt};
use std::mem;

/// Compile-time description of a frame header.
///
/// Implementations are zero-sized marker types; one per protocol. All
/// frames produced or consumed under a given layout share identical
/// header geometry, so streams parameterized by the same layout are
/// wire-compatible with each other.
pub trait HeaderLayout {
    /// Integer type of the length field (and of string length prefixes).
    /// The field width on the wire is `size_of::<Self::Length>()`.
    type Length: LengthInt;

    /// Opaque bytes reserved before the length field.
    const PRE_OFFSET: usize;

    /// Opaque bytes reserved after the length field, before the payload.
    const POST_OFFSET: usize;

    /// Whether the encoded length counts the header bytes or only the payload.
    const LENGTH_INCLUDES_HEADER: bool;

    /// Byte order of the length field and of every integer payload field.
    const ENDIAN: Endianness;

    /// Total header size in bytes.
    const HEADER_LEN: usize =
        Self::PRE_OFFSET + mem::size_of::<Self::Length>() + Self::POST_OFFSET;
}

/// Default layout: 2-byte little-endian length field with no surrounding
/// offsets, length counting the whole frame. Usable as-is for simple
/// protocols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultHeader;

impl HeaderLayout for DefaultHeader {
    type Length = u16;
    const PRE_OFFSET: usize = 0;
    const POST_OFFSET: usize = 0;
    const LENGTH_INCLUDES_HEADER: bool = true;
    const ENDIAN: Endianness = Endianness::Little;
}
