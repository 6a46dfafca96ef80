//! Scalar and byte-buffer codec utilities.
//!
//! Fixed-width scalar values are converted to and from little-endian byte
//! sequences through the [`Scalar`] trait. Decoding is strict: a byte count
//! that does not exactly match the scalar width is an error, never a
//! truncation, since a silent truncation would corrupt the numeric
//! interpretation of a field payload.

use crate::error::PacketError;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width scalar with a little-endian wire encoding.
///
/// Implemented for the closed set of types the protocol carries: the
/// integer primitives, `f32`/`f64`, and `bool` (one byte, nonzero = true).
pub trait Scalar: Sized + sealed::Sealed {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Append the little-endian encoding of `self` to `buf`.
    fn encode(&self, buf: &mut Vec<u8>);

    /// Decode from exactly `WIDTH` bytes. Callers check the length.
    fn decode(bytes: &[u8]) -> Self;
}

macro_rules! impl_scalar {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Scalar for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn encode(&self, buf: &mut Vec<u8>) {
                    buf.extend_from_slice(&self.to_le_bytes());
                }

                fn decode(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_scalar!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl sealed::Sealed for bool {}
impl Scalar for bool {
    const WIDTH: usize = 1;

    fn encode(&self, buf: &mut Vec<u8>) {
        buf.push(*self as u8);
    }

    fn decode(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

/// Encode a scalar as its little-endian wire bytes.
pub fn to_bytes<T: Scalar>(value: T) -> Vec<u8> {
    let mut buf = Vec::with_capacity(T::WIDTH);
    value.encode(&mut buf);
    buf
}

/// Decode a scalar from its little-endian wire bytes.
///
/// Fails unless `bytes` is exactly `T::WIDTH` bytes long.
pub fn from_bytes<T: Scalar>(bytes: &[u8]) -> Result<T, PacketError> {
    if bytes.len() != T::WIDTH {
        return Err(PacketError::ScalarLengthMismatch {
            expected: T::WIDTH,
            actual: bytes.len(),
        });
    }
    Ok(T::decode(bytes))
}

/// Decode a sequence of scalars packed back to back.
///
/// Fails unless `bytes.len()` is a multiple of `T::WIDTH`.
pub fn vector_from_bytes<T: Scalar>(bytes: &[u8]) -> Result<Vec<T>, PacketError> {
    if bytes.len() % T::WIDTH != 0 {
        return Err(PacketError::VectorLengthMismatch {
            len: bytes.len(),
            width: T::WIDTH,
        });
    }
    Ok(bytes.chunks_exact(T::WIDTH).map(T::decode).collect())
}

/// Borrow `count` bytes starting at `start`.
///
/// Fails with an out-of-range error if the window reaches past the end of
/// the buffer.
pub fn subslice(bytes: &[u8], start: usize, count: usize) -> Result<&[u8], PacketError> {
    bytes
        .get(start..start.checked_add(count).unwrap_or(usize::MAX))
        .ok_or(PacketError::OutOfRange {
            start,
            count,
            len: bytes.len(),
        })
}

/// Render bytes as space-separated `0xHH` tokens, for diagnostics.
pub fn to_hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 5);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("0x{:02X}", b));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_round_trip() {
        assert_eq!(from_bytes::<u16>(&to_bytes(0x1234u16)).unwrap(), 0x1234);
        assert_eq!(from_bytes::<i32>(&to_bytes(-5i32)).unwrap(), -5);
        assert_eq!(from_bytes::<f64>(&to_bytes(12.5f64)).unwrap(), 12.5);
        assert!(from_bytes::<bool>(&to_bytes(true)).unwrap());
    }

    #[test]
    fn scalars_are_little_endian() {
        assert_eq!(to_bytes(0x1234u16), vec![0x34, 0x12]);
        assert_eq!(to_bytes(1.0f64), 1.0f64.to_le_bytes().to_vec());
    }

    #[test]
    fn from_bytes_rejects_wrong_width() {
        let err = from_bytes::<u16>(&[0x01]).unwrap_err();
        assert_eq!(
            err,
            PacketError::ScalarLengthMismatch {
                expected: 2,
                actual: 1
            }
        );
        // Too many bytes is just as wrong as too few.
        assert!(from_bytes::<u16>(&[0x01, 0x02, 0x03]).is_err());
    }

    #[test]
    fn vector_from_bytes_splits_chunks() {
        let mut bytes = to_bytes(1.5f64);
        bytes.extend(to_bytes(-2.5f64));
        assert_eq!(vector_from_bytes::<f64>(&bytes).unwrap(), vec![1.5, -2.5]);
    }

    #[test]
    fn vector_from_bytes_rejects_partial_chunk() {
        let err = vector_from_bytes::<f64>(&[0u8; 9]).unwrap_err();
        assert_eq!(err, PacketError::VectorLengthMismatch { len: 9, width: 8 });
    }

    #[test]
    fn subslice_bounds() {
        let bytes = [0u8, 1, 2, 3, 4];
        assert_eq!(subslice(&bytes, 1, 3).unwrap(), &[1, 2, 3]);
        assert_eq!(subslice(&bytes, 0, 5).unwrap(), &bytes[..]);
        // The window must fit inside the buffer, not just the count.
        assert!(subslice(&bytes, 3, 3).is_err());
        assert!(subslice(&bytes, 5, 0).is_ok());
        assert!(subslice(&bytes, 6, 0).is_err());
    }

    #[test]
    fn hex_string_format() {
        assert_eq!(to_hex_string(&[0x75, 0x65, 0x0A]), "0x75 0x65 0x0A");
        assert_eq!(to_hex_string(&[]), "");
    }

    #[test]
    fn bool_decodes_nonzero_as_true() {
        assert!(from_bytes::<bool>(&[0x02]).unwrap());
        assert!(!from_bytes::<bool>(&[0x00]).unwrap());
    }
}
