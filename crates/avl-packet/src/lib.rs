//! AVL binary packet protocol
//!
//! This crate implements the framing layer of the AVL vehicle communication
//! protocol: length-prefixed fields, checksummed packets, and multi-packet
//! stream parsing. Two layered structures make up the wire format:
//!
//! - **Field**: a length-prefixed, descriptor-tagged byte blob. The atomic
//!   unit of the protocol.
//! - **Packet**: a framed, checksummed collection of fields under one packet
//!   descriptor.
//!
//! Some field payloads are themselves the serialized bytes of nested packets
//! (a task packet inside a mission append field, for example). There is no
//! distinct container type for this; the consumer reinterprets the field
//! data through the same parse path.
//!
//! All multi-byte scalars on the wire are little-endian.
//!
//! # Example
//!
//! ```
//! use avl_packet::{Field, Packet};
//!
//! let mut packet = Packet::new(0x02);
//! packet.add_field(Field::with_data(0x01, vec![0xAA, 0xBB]));
//! let bytes = packet.to_bytes();
//!
//! let parsed = Packet::from_bytes(&bytes).unwrap();
//! assert_eq!(parsed, packet);
//! ```

mod checksum;
mod error;
mod field;
mod packet;
mod scalar;
mod stream;

pub use checksum::checksum;
pub use error::PacketError;
pub use field::Field;
pub use packet::{Packet, PACKET_HEADER, PACKET_OVERHEAD};
pub use scalar::{from_bytes, subslice, to_bytes, to_hex_string, vector_from_bytes, Scalar};
pub use stream::PacketAssembler;
