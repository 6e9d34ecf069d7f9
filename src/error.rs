//! Decode error types.

use thiserror::Error;

/// Errors raised when a [`ReadStream`](crate::ReadStream) operation would
/// run past the end of its frame.
///
/// These indicate a mismatch between writer and reader field order or
/// types — a programming error on one side of the protocol — rather than
/// a transport problem, since the frame was already certified complete
/// before decoding started. The stream never clamps a read or touches
/// adjacent memory; it surfaces one of these instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    #[error("frame exhausted: no bytes left to read")]
    Exhausted,

    #[error("unit of {requested} bytes exceeds the whole frame of {frame_len} bytes")]
    UnitTooLarge { requested: usize, frame_len: usize },

    #[error("insufficient bytes: requested {requested}, only {remaining} remain")]
    Insufficient { requested: usize, remaining: usize },

    #[error("invalid UTF-8 in string field")]
    InvalidUtf8,
}
