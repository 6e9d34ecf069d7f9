//! Byte-order conversion for wire integers and host-layout raw values.

use std::mem;

/// Byte order used for multi-byte integer fields on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// Returns the byte order of the host this code is running on.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }
}

/// A fixed-width integer that can be marshalled in a chosen byte order.
///
/// One-byte integers are copied as-is; wider integers are byte-swapped
/// when the wire order differs from the host order.
pub trait WireInt: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Writes the wire encoding of `self` into the first `WIDTH` bytes of `dst`.
    fn put_wire(self, endian: Endianness, dst: &mut [u8]);

    /// Decodes a value from the first `WIDTH` bytes of `src`.
    fn from_wire(endian: Endianness, src: &[u8]) -> Self;
}

macro_rules! impl_wire_int {
    ($($t:ty),*) => {
        $(
            impl WireInt for $t {
                const WIDTH: usize = mem::size_of::<$t>();

                fn put_wire(self, endian: Endianness, dst: &mut [u8]) {
                    let bytes = match endian {
                        Endianness::Big => self.to_be_bytes(),
                        Endianness::Little => self.to_le_bytes(),
                    };
                    dst[..<Self as WireInt>::WIDTH].copy_from_slice(&bytes);
                }

                fn from_wire(endian: Endianness, src: &[u8]) -> Self {
                    let mut bytes = [0u8; mem::size_of::<$t>()];
                    bytes.copy_from_slice(&src[..<Self as WireInt>::WIDTH]);
                    match endian {
                        Endianness::Big => <$t>::from_be_bytes(bytes),
                        Endianness::Little => <$t>::from_le_bytes(bytes),
                    }
                }
            }
        )*
    };
}

impl_wire_int!(u8, i8, u16, i16, u32, i32, u64, i64);

/// A fixed-width value serialized in host representation.
///
/// Booleans, single bytes, and floating-point values are copied verbatim
/// with no byte-order translation, even when the wire order differs from
/// the host order. This mirrors the wire format exactly as deployed; a
/// cross-endian peer exchanging floats would need conversion at a higher
/// layer.
pub trait RawValue: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Writes the host-layout bytes of `self` into the first `WIDTH` bytes of `dst`.
    fn put_host(self, dst: &mut [u8]);

    /// Decodes a value from the first `WIDTH` bytes of `src`.
    fn from_host(src: &[u8]) -> Self;
}

macro_rules! impl_raw_value {
    ($($t:ty),*) => {
        $(
            impl RawValue for $t {
                const WIDTH: usize = mem::size_of::<$t>();

                fn put_host(self, dst: &mut [u8]) {
                    dst[..<Self as RawValue>::WIDTH].copy_from_slice(&self.to_ne_bytes());
                }

                fn from_host(src: &[u8]) -> Self {
                    let mut bytes = [0u8; mem::size_of::<$t>()];
                    bytes.copy_from_slice(&src[..<Self as RawValue>::WIDTH]);
                    <$t>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_raw_value!(u8, i8, f32, f64);

impl RawValue for bool {
    const WIDTH: usize = 1;

    fn put_host(self, dst: &mut [u8]) {
        dst[0] = u8::from(self);
    }

    fn from_host(src: &[u8]) -> Self {
        src[0] != 0
    }
}

/// An unsigned integer usable as a frame length field.
///
/// Implemented for the four supported length field widths (1, 2, 4, 8).
pub trait LengthInt: WireInt {
    /// Largest representable length, widened to `usize`.
    const MAX_LEN: usize;

    fn to_usize(self) -> usize;

    /// Narrows a length to the field width. Values beyond `MAX_LEN` are
    /// truncated; keeping frames within the field width is the caller's
    /// contract (enforce it with `check_frame` limits on the receive side).
    fn from_usize(value: usize) -> Self;
}

macro_rules! impl_length_int {
    ($($t:ty),*) => {
        $(
            impl LengthInt for $t {
                const MAX_LEN: usize = <$t>::MAX as usize;

                fn to_usize(self) -> usize {
                    self as usize
                }

                fn from_usize(value: usize) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_length_int!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_matches_target_endian() {
        #[cfg(target_endian = "little")]
        assert_eq!(Endianness::native(), Endianness::Little);
        #[cfg(target_endian = "big")]
        assert_eq!(Endianness::native(), Endianness::Big);
    }

    #[test]
    fn wire_int_symmetry_both_orders() {
        let value: u32 = 0xDEAD_BEEF;
        for endian in [Endianness::Big, Endianness::Little] {
            let mut buf = [0u8; 4];
            value.put_wire(endian, &mut buf);
            assert_eq!(u32::from_wire(endian, &buf), value);
        }
    }

    #[test]
    fn wire_int_orders_actually_differ() {
        let value: u16 = 0x1234;

        let mut le = [0u8; 2];
        value.put_wire(Endianness::Little, &mut le);
        assert_eq!(le, [0x34, 0x12]);

        let mut be = [0u8; 2];
        value.put_wire(Endianness::Big, &mut be);
        assert_eq!(be, [0x12, 0x34]);

        // Decoding with the wrong order does not recover the value.
        assert_ne!(u16::from_wire(Endianness::Big, &le), value);
    }

    #[test]
    fn single_byte_never_reorders() {
        for endian in [Endianness::Big, Endianness::Little] {
            let mut buf = [0u8; 1];
            0xABu8.put_wire(endian, &mut buf);
            assert_eq!(buf, [0xAB]);
            assert_eq!(u8::from_wire(endian, &buf), 0xAB);
        }
    }

    #[test]
    fn signed_wire_int_roundtrip() {
        let value: i64 = -1_234_567_890_123;
        let mut buf = [0u8; 8];
        value.put_wire(Endianness::Big, &mut buf);
        assert_eq!(i64::from_wire(Endianness::Big, &buf), value);
    }

    #[test]
    fn raw_value_host_layout() {
        let mut buf = [0u8; 8];
        1.5f64.put_host(&mut buf);
        assert_eq!(buf, 1.5f64.to_ne_bytes());
        assert_eq!(f64::from_host(&buf), 1.5);
    }

    #[test]
    fn bool_raw_value() {
        let mut buf = [0u8; 1];
        true.put_host(&mut buf);
        assert_eq!(buf, [1]);
        assert!(bool::from_host(&buf));
        assert!(!bool::from_host(&[0]));
        // Any non-zero byte decodes as true.
        assert!(bool::from_host(&[7]));
    }

    #[test]
    fn length_int_widening() {
        assert_eq!(u16::MAX_LEN, 65535);
        assert_eq!(u16::from_usize(7).to_usize(), 7);
        assert_eq!(u8::from_usize(255).to_usize(), 255);
    }
}
