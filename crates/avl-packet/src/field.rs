//! Field encoding and decoding.
//!
//! A field is the atomic unit of the AVL protocol: a length prefix, a
//! descriptor byte, and a data blob.
//!
//! | Part       | Size (bytes) | Description                                     |
//! |------------|--------------|-------------------------------------------------|
//! | length     | 2 (LE)       | Total field length, including these two bytes.  |
//! | descriptor | 1            | Semantic tag, scoped to the containing packet.  |
//! | data       | length - 3   | Payload bytes. May be empty.                    |

use crate::error::PacketError;
use crate::scalar::{self, from_bytes};

/// Bytes of framing around a field's data: 2 length bytes + 1 descriptor.
pub(crate) const FIELD_OVERHEAD: usize = 3;

/// A length-prefixed, descriptor-tagged byte blob.
///
/// The length is not stored; it is always `3 + data.len()`, so the length
/// invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Field {
    descriptor: u8,
    data: Vec<u8>,
}

impl Field {
    /// Create a field with the given descriptor and no data.
    pub fn new(descriptor: u8) -> Self {
        Field {
            descriptor,
            data: Vec::new(),
        }
    }

    /// Create a field with the given descriptor and data bytes.
    pub fn with_data(descriptor: u8, data: Vec<u8>) -> Self {
        Field { descriptor, data }
    }

    /// Parse a field from its complete wire bytes.
    ///
    /// Fails if the leading length prefix does not equal the number of
    /// bytes given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PacketError> {
        if bytes.len() < FIELD_OVERHEAD {
            return Err(PacketError::FieldLengthMismatch {
                expected: FIELD_OVERHEAD as u16,
                actual: bytes.len(),
            });
        }
        let length: u16 = from_bytes(&bytes[0..2])?;
        if length as usize != bytes.len() {
            return Err(PacketError::FieldLengthMismatch {
                expected: length,
                actual: bytes.len(),
            });
        }
        Ok(Field {
            descriptor: bytes[2],
            data: bytes[FIELD_OVERHEAD..].to_vec(),
        })
    }

    /// Serialize the field to its wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.length() as usize);
        bytes.extend_from_slice(&self.length().to_le_bytes());
        bytes.push(self.descriptor);
        bytes.extend_from_slice(&self.data);
        bytes
    }

    /// Total field length in bytes, including the two length bytes.
    pub fn length(&self) -> u16 {
        (FIELD_OVERHEAD + self.data.len()) as u16
    }

    /// The field descriptor byte.
    pub fn descriptor(&self) -> u8 {
        self.descriptor
    }

    /// Replace the field descriptor.
    pub fn set_descriptor(&mut self, descriptor: u8) {
        self.descriptor = descriptor;
    }

    /// The field data bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Replace the field data. The reported length follows automatically.
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Render the field as space-separated `0xHH` tokens.
    pub fn to_hex_string(&self) -> String {
        scalar::to_hex_string(&self.to_bytes())
    }
}
