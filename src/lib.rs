//! # framepack
//!
//! Length-prefixed binary framing and field serialization.
//!
//! This crate provides:
//! - A compile-time [`HeaderLayout`] describing frame geometry: opaque
//!   pre/post offsets around a length field of configurable width,
//!   inclusive or payload-only length semantics, and wire byte order
//! - [`check_frame`], the completeness check a transport layer calls to
//!   drive incremental socket reads
//! - [`WriteStream`] / [`ReadStream`], symmetric field-by-field frame
//!   serialization with continuous length bookkeeping and bounds-checked
//!   decoding
//!
//! The codec does not open sockets or accumulate partial reads; the
//! caller buffers incoming bytes and asks [`check_frame`] whether a full
//! frame is present (and if not, how many more bytes to await).
//!
//! ```
//! use framepack::{check_frame, DefaultHeader, FrameStatus, ReadStream, WriteStream};
//!
//! let mut frame = WriteStream::<DefaultHeader>::new();
//! frame.write_int(7u32).write_str("hello");
//!
//! let buf = frame.into_bytes();
//! assert_eq!(
//!     check_frame::<DefaultHeader>(&buf, framepack::DEFAULT_MAX_FRAME_LEN),
//!     FrameStatus::Complete
//! );
//!
//! let mut fields = ReadStream::<DefaultHeader>::new(&buf);
//! assert_eq!(fields.read_int::<u32>().unwrap(), 7);
//! assert_eq!(fields.read_str().unwrap(), "hello");
//! ```

pub mod endian;
pub mod error;
pub mod frame;
pub mod header;
pub mod read;
pub mod write;

pub use endian::{Endianness, LengthInt, RawValue, WireInt};
pub use error::ReadError;
pub use frame::{check_frame, FrameStatus};
pub use header::{DefaultHeader, HeaderLayout};
pub use read::ReadStream;
pub use write::WriteStream;

/// Default maximum accepted frame size (16 MiB), for callers without a
/// protocol-specific limit.
pub const DEFAULT_MAX_FRAME_LEN: usize = 16 * 1024 * 1024;
