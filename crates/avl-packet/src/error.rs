//! Error types for avl-packet.

use thiserror::Error;

/// Errors that can occur during packet and field operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PacketError {
    /// The buffer ends in the middle of a packet. This is the only
    /// retryable error: the caller should wait for more bytes rather than
    /// treat the data as corrupt.
    #[error("incomplete packet: need {needed} bytes, have {available}")]
    Incomplete {
        /// Total bytes required for the packet.
        needed: usize,
        /// Bytes currently available.
        available: usize,
    },

    /// The first two bytes do not match the packet header constant.
    #[error("header mismatch: expected [0x75, 0x65], got [0x{0:02X}, 0x{1:02X}]")]
    HeaderMismatch(u8, u8),

    /// The payload length field disagrees with the actual byte count.
    #[error("payload length mismatch: length field says {expected}, buffer has {actual}")]
    PayloadLengthMismatch {
        /// Payload length claimed by the length field.
        expected: u16,
        /// Payload bytes actually present.
        actual: usize,
    },

    /// The trailing checksum does not match the computed checksum.
    #[error("checksum mismatch: expected {expected:02X?}, got {actual:02X?}")]
    ChecksumMismatch {
        /// Checksum computed over the packet bytes.
        expected: [u8; 2],
        /// Checksum bytes found in the buffer.
        actual: [u8; 2],
    },

    /// A field's length prefix disagrees with the bytes given for it.
    #[error("field length mismatch: length field says {expected}, buffer has {actual}")]
    FieldLengthMismatch {
        /// Field length claimed by the length prefix.
        expected: u16,
        /// Field bytes actually present.
        actual: usize,
    },

    /// A packet payload could not be split into well-formed fields.
    #[error("malformed field data in packet payload")]
    MalformedFieldData,

    /// Lookup of a field by descriptor found no match.
    #[error("packet has no field with descriptor 0x{0:02X}")]
    FieldNotFound(u8),

    /// A scalar decode was given the wrong number of bytes.
    #[error("scalar length mismatch: expected {expected} bytes, got {actual}")]
    ScalarLengthMismatch {
        /// Width of the target scalar type.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },

    /// A vector decode was given a byte count that is not a multiple of the
    /// element width.
    #[error("vector length {len} is not a multiple of element width {width}")]
    VectorLengthMismatch {
        /// Bytes supplied.
        len: usize,
        /// Width of the element type.
        width: usize,
    },

    /// A subslice request reaches past the end of the buffer.
    #[error("range out of bounds: start {start} + count {count} exceeds length {len}")]
    OutOfRange {
        /// Requested start index.
        start: usize,
        /// Requested element count.
        count: usize,
        /// Length of the buffer.
        len: usize,
    },
}
