//! Error types for avl-commands.

use thiserror::Error;

use avl_packet::PacketError;

/// Errors that can occur when converting between packets and semantic
/// records.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommandError {
    /// A packet of one type was given where another was expected.
    #[error("wrong packet type: expected descriptor 0x{expected:02X}, got 0x{actual:02X}")]
    WrongPacketType {
        /// Expected packet descriptor.
        expected: u8,
        /// Descriptor actually present.
        actual: u8,
    },

    /// A field of one descriptor was given where another was expected.
    #[error("wrong field descriptor: expected 0x{expected:02X}, got 0x{actual:02X}")]
    WrongFieldDescriptor {
        /// Expected field descriptor.
        expected: u8,
        /// Descriptor actually present.
        actual: u8,
    },

    /// A task type code outside the known set.
    #[error("unknown task type code: 0x{0:02X}")]
    UnknownTaskType(u8),

    /// A parameter type tag outside the known set.
    #[error("unknown parameter type: {0:?}")]
    UnknownParamType(String),

    /// A required field is missing from the packet.
    #[error("missing required field with descriptor 0x{0:02X}")]
    MissingField(u8),

    /// A string field holds invalid UTF-8.
    #[error("invalid UTF-8 in string field with descriptor 0x{0:02X}")]
    InvalidUtf8(u8),

    /// An underlying framing or codec failure.
    #[error(transparent)]
    Packet(#[from] PacketError),
}
