//! Packet encoding, decoding, and multi-packet stream parsing.
//!
//! A packet frames an ordered sequence of fields between a fixed header
//! and a trailing checksum:
//!
//! | Part           | Size (bytes) | Description                                      |
//! |----------------|--------------|--------------------------------------------------|
//! | header         | 2            | Constant `0x75 0x65`, marks the packet start.    |
//! | descriptor     | 1            | Packet type tag.                                 |
//! | payload length | 2 (LE)       | Sum of all contained fields' lengths.            |
//! | payload        | N            | The fields, back to back in insertion order.     |
//! | checksum       | 2            | Running sum over every preceding byte.           |
//!
//! Several packets may sit back to back in one buffer with no outer
//! delimiter; each packet's payload length field makes the stream
//! self-delimiting (see [`Packet::parse_multiple`]).

use crate::checksum::checksum;
use crate::error::PacketError;
use crate::field::{Field, FIELD_OVERHEAD};
use crate::scalar::{self, from_bytes};

/// The two header bytes that start every packet.
pub const PACKET_HEADER: [u8; 2] = [0x75, 0x65];

/// Framing bytes around a packet's payload: header, descriptor, payload
/// length, and checksum.
pub const PACKET_OVERHEAD: usize = 7;

/// A framed, checksummed collection of fields under one packet descriptor.
///
/// The payload length is not stored; it is always the sum of the contained
/// fields' lengths, so the payload-length invariant holds by construction.
/// Duplicate field descriptors are permitted; lookups return the first
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Packet {
    descriptor: u8,
    fields: Vec<Field>,
}

impl Packet {
    /// Create an empty packet with the given descriptor.
    pub fn new(descriptor: u8) -> Self {
        Packet {
            descriptor,
            fields: Vec::new(),
        }
    }

    /// Parse a single packet from its complete wire bytes.
    ///
    /// The buffer must contain exactly one packet. Validation order:
    /// header, payload length, checksum, then field structure; each
    /// failure is a distinct [`PacketError`] variant. A buffer too short
    /// to hold the framing yields the retryable
    /// [`PacketError::Incomplete`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PacketError> {
        if bytes.len() < PACKET_OVERHEAD {
            return Err(PacketError::Incomplete {
                needed: PACKET_OVERHEAD,
                available: bytes.len(),
            });
        }

        if bytes[0..2] != PACKET_HEADER {
            return Err(PacketError::HeaderMismatch(bytes[0], bytes[1]));
        }

        let descriptor = bytes[2];

        // The payload length field must account for every byte between the
        // framing: total length minus header, descriptor, length, checksum.
        let payload_length: u16 = from_bytes(&bytes[3..5])?;
        if payload_length as usize != bytes.len() - PACKET_OVERHEAD {
            return Err(PacketError::PayloadLengthMismatch {
                expected: payload_length,
                actual: bytes.len() - PACKET_OVERHEAD,
            });
        }

        let checked = &bytes[..bytes.len() - 2];
        let expected = checksum(checked);
        let actual = [bytes[bytes.len() - 2], bytes[bytes.len() - 1]];
        if expected != actual {
            return Err(PacketError::ChecksumMismatch { expected, actual });
        }

        // Peel fields off the front of the payload; each field's own
        // length prefix delimits it.
        let mut fields = Vec::new();
        let mut payload = &bytes[5..bytes.len() - 2];
        while !payload.is_empty() {
            if payload.len() < 2 {
                return Err(PacketError::MalformedFieldData);
            }
            let field_length = u16::from_le_bytes([payload[0], payload[1]]) as usize;
            if field_length < FIELD_OVERHEAD || field_length > payload.len() {
                return Err(PacketError::MalformedFieldData);
            }
            let field = Field::from_bytes(&payload[..field_length])
                .map_err(|_| PacketError::MalformedFieldData)?;
            fields.push(field);
            payload = &payload[field_length..];
        }

        Ok(Packet { descriptor, fields })
    }

    /// Parse a buffer containing one or more back-to-back packets.
    ///
    /// Each packet's payload length field tells the parser how many bytes
    /// to slice for it; parsing continues until the buffer is exhausted.
    /// A buffer that ends mid-packet yields [`PacketError::Incomplete`]
    /// so the caller can wait for more bytes; any malformed packet fails
    /// the whole batch. There is no resynchronization here — that policy
    /// belongs to [`PacketAssembler`](crate::PacketAssembler).
    pub fn parse_multiple(bytes: &[u8]) -> Result<Vec<Packet>, PacketError> {
        let mut packets = Vec::new();
        let mut remaining = bytes;

        while !remaining.is_empty() {
            if remaining.len() < 5 {
                return Err(PacketError::Incomplete {
                    needed: PACKET_OVERHEAD,
                    available: remaining.len(),
                });
            }
            let payload_length = u16::from_le_bytes([remaining[3], remaining[4]]) as usize;
            let total = PACKET_OVERHEAD + payload_length;
            if remaining.len() < total {
                return Err(PacketError::Incomplete {
                    needed: total,
                    available: remaining.len(),
                });
            }
            packets.push(Packet::from_bytes(&remaining[..total])?);
            remaining = &remaining[total..];
        }

        Ok(packets)
    }

    /// Serialize the packet, including header and checksum.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(PACKET_OVERHEAD + self.payload_length() as usize);
        bytes.extend_from_slice(&PACKET_HEADER);
        bytes.push(self.descriptor);
        bytes.extend_from_slice(&self.payload_length().to_le_bytes());
        for field in &self.fields {
            bytes.extend_from_slice(&field.to_bytes());
        }
        let check = checksum(&bytes);
        bytes.extend_from_slice(&check);
        bytes
    }

    /// The packet descriptor byte.
    pub fn descriptor(&self) -> u8 {
        self.descriptor
    }

    /// Replace the packet descriptor.
    pub fn set_descriptor(&mut self, descriptor: u8) {
        self.descriptor = descriptor;
    }

    /// Total payload length: the sum of all contained fields' lengths.
    pub fn payload_length(&self) -> u16 {
        self.fields.iter().map(|f| f.length()).sum()
    }

    /// Whether the packet contains a field with the given descriptor.
    pub fn has_field(&self, field_descriptor: u8) -> bool {
        self.field_index(field_descriptor).is_some()
    }

    /// Index of the first field with the given descriptor.
    pub fn field_index(&self, field_descriptor: u8) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.descriptor() == field_descriptor)
    }

    /// The first field with the given descriptor.
    ///
    /// Callers reading optional fields guard with [`Packet::has_field`];
    /// an absent descriptor is an error here.
    pub fn field(&self, field_descriptor: u8) -> Result<&Field, PacketError> {
        self.field_index(field_descriptor)
            .map(|i| &self.fields[i])
            .ok_or(PacketError::FieldNotFound(field_descriptor))
    }

    /// Number of fields in the packet.
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// The packet's fields in wire order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Append a field. Duplicate descriptors are legal; lookups return
    /// the first match.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Append an empty field with the given descriptor.
    pub fn add(&mut self, field_descriptor: u8) {
        self.add_field(Field::new(field_descriptor));
    }

    /// Append a field with the given descriptor and data.
    pub fn add_data(&mut self, field_descriptor: u8, data: Vec<u8>) {
        self.add_field(Field::with_data(field_descriptor, data));
    }

    /// Remove all fields. The descriptor is untouched and the payload
    /// length drops to zero.
    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    /// Render the packet as space-separated `0xHH` tokens.
    pub fn to_hex_string(&self) -> String {
        scalar::to_hex_string(&self.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_packet() -> Packet {
        let mut packet = Packet::new(0x02);
        packet.add_data(0x01, vec![0xAA, 0xBB]);
        packet.add(0x05);
        packet
    }

    #[test]
    fn empty_packet_wire_format() {
        let packet = Packet::new(0x01);
        let bytes = packet.to_bytes();
        assert_eq!(bytes.len(), PACKET_OVERHEAD);
        assert_eq!(&bytes[..2], &PACKET_HEADER);
        assert_eq!(bytes[2], 0x01);
        assert_eq!(&bytes[3..5], &[0x00, 0x00]);
        assert_eq!(&bytes[5..], &checksum(&bytes[..5]));
    }

    #[test]
    fn payload_length_sums_field_lengths() {
        let packet = sample_packet();
        // 5 bytes for the first field, 3 for the second.
        assert_eq!(packet.payload_length(), 8);
    }

    #[test]
    fn round_trip() {
        let packet = sample_packet();
        let bytes = packet.to_bytes();
        let parsed = Packet::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, packet);
        assert_eq!(parsed.to_bytes(), bytes);
    }

    #[test]
    fn rejects_header_mismatch() {
        let mut bytes = sample_packet().to_bytes();
        bytes[0] = 0x74;
        assert!(matches!(
            Packet::from_bytes(&bytes),
            Err(PacketError::HeaderMismatch(0x74, 0x65))
        ));
    }

    #[test]
    fn rejects_truncation() {
        let bytes = sample_packet().to_bytes();
        // Truncating changes the apparent payload size.
        assert!(matches!(
            Packet::from_bytes(&bytes[..bytes.len() - 1]),
            Err(PacketError::PayloadLengthMismatch { .. })
        ));
        // A buffer shorter than the framing is retryable, not malformed.
        assert!(matches!(
            Packet::from_bytes(&bytes[..4]),
            Err(PacketError::Incomplete { .. })
        ));
    }

    #[test]
    fn rejects_checksum_corruption() {
        let mut bytes = sample_packet().to_bytes();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        assert!(matches!(
            Packet::from_bytes(&bytes),
            Err(PacketError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn rejects_malformed_field_data() {
        // Build framing by hand around a field whose length prefix
        // overruns the payload.
        let payload = [0x09u8, 0x00, 0x01, 0xAA];
        let mut bytes = vec![0x75, 0x65, 0x02];
        bytes.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        bytes.extend_from_slice(&payload);
        let check = checksum(&bytes);
        bytes.extend_from_slice(&check);
        assert_eq!(
            Packet::from_bytes(&bytes),
            Err(PacketError::MalformedFieldData)
        );
    }

    #[test]
    fn duplicate_descriptors_return_first() {
        let mut packet = Packet::new(0x01);
        packet.add_data(0x03, vec![0x01]);
        packet.add_data(0x03, vec![0x02]);
        assert_eq!(packet.num_fields(), 2);
        assert_eq!(packet.field(0x03).unwrap().data(), &[0x01]);
    }

    #[test]
    fn field_lookup() {
        let packet = sample_packet();
        assert!(packet.has_field(0x05));
        assert!(!packet.has_field(0x06));
        assert_eq!(packet.field_index(0x05), Some(1));
        assert_eq!(
            packet.field(0x06),
            Err(PacketError::FieldNotFound(0x06))
        );
    }

    #[test]
    fn clear_fields_resets_payload() {
        let mut packet = sample_packet();
        packet.clear_fields();
        assert_eq!(packet.payload_length(), 0);
        assert_eq!(packet.num_fields(), 0);
        assert_eq!(packet.descriptor(), 0x02);
    }

    #[test]
    fn parse_multiple_round_trip() {
        let a = sample_packet();
        let mut b = Packet::new(0x05);
        b.add_data(0x06, vec![0x01, 0x02, 0x03]);
        let c = Packet::new(0x01);

        let mut stream = a.to_bytes();
        stream.extend(b.to_bytes());
        stream.extend(c.to_bytes());

        let packets = Packet::parse_multiple(&stream).unwrap();
        assert_eq!(packets, vec![a, b, c]);
    }

    #[test]
    fn parse_multiple_empty_input() {
        assert_eq!(Packet::parse_multiple(&[]).unwrap(), vec![]);
    }

    #[test]
    fn parse_multiple_trailing_partial_is_incomplete() {
        let a = sample_packet();
        let mut stream = a.to_bytes();
        let b = a.to_bytes();
        stream.extend(&b[..b.len() - 3]);

        let err = Packet::parse_multiple(&stream).unwrap_err();
        assert_eq!(
            err,
            PacketError::Incomplete {
                needed: b.len(),
                available: b.len() - 3
            }
        );
    }

    #[test]
    fn parse_multiple_aborts_on_bad_packet() {
        let a = sample_packet();
        let mut stream = a.to_bytes();
        let mut bad = a.to_bytes();
        bad[0] = 0x00;
        stream.extend(&bad);

        assert!(matches!(
            Packet::parse_multiple(&stream),
            Err(PacketError::HeaderMismatch(..))
        ));
    }
}
