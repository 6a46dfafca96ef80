//! Transport-side packet reassembly.
//!
//! Transports deliver bytes in arbitrary chunks: a packet may arrive split
//! across reads, and several packets may arrive in one read. The
//! [`PacketAssembler`] buffers received bytes and yields complete packets
//! as they become available, so each connection can feed its raw reads in
//! and pull framed packets out.

use bytes::{Buf, BytesMut};

use crate::error::PacketError;
use crate::packet::{Packet, PACKET_HEADER, PACKET_OVERHEAD};

/// Initial buffer capacity for a connection's assembler.
const INITIAL_CAPACITY: usize = 1024;

/// Accumulates raw received bytes and extracts complete packets.
///
/// Bytes before a `0x75 0x65` header are discarded, which resynchronizes
/// the stream after line noise or a dropped partial packet. A packet that
/// frames correctly but fails validation is consumed past its first byte
/// and reported, so the next call rescans from the following byte.
#[derive(Debug, Default)]
pub struct PacketAssembler {
    buffer: BytesMut,
}

impl PacketAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        PacketAssembler {
            buffer: BytesMut::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append raw received bytes to the buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Try to extract the next complete packet from the buffer.
    ///
    /// Returns `Ok(Some(packet))` when a complete, valid packet was
    /// consumed, `Ok(None)` when more data is needed, or `Err` when the
    /// buffered bytes framed a packet that failed validation. After an
    /// error the offending header byte has been skipped, so the caller may
    /// keep calling to recover subsequent packets.
    pub fn next_packet(&mut self) -> Result<Option<Packet>, PacketError> {
        // Discard garbage up to the next plausible header.
        let skipped = self.scan_to_header();
        if skipped > 0 {
            log::debug!("discarded {skipped} bytes before packet header");
        }

        if self.buffer.len() < 5 {
            return Ok(None);
        }

        let payload_length = u16::from_le_bytes([self.buffer[3], self.buffer[4]]) as usize;
        let total = PACKET_OVERHEAD + payload_length;
        if self.buffer.len() < total {
            return Ok(None);
        }

        match Packet::from_bytes(&self.buffer[..total]) {
            Ok(packet) => {
                self.buffer.advance(total);
                Ok(Some(packet))
            }
            Err(err) => {
                // Skip the bogus header byte; the next call rescans from
                // the byte after it.
                self.buffer.advance(1);
                Err(err)
            }
        }
    }

    /// Number of bytes currently buffered.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Discard all buffered bytes.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Advance the buffer to the next header match, returning the number
    /// of bytes discarded. Keeps a trailing lone `0x75` in case its pair
    /// arrives in the next chunk.
    fn scan_to_header(&mut self) -> usize {
        let mut skipped = 0;
        while !self.buffer.is_empty() {
            if self.buffer[0] == PACKET_HEADER[0] {
                if self.buffer.len() < 2 || self.buffer[1] == PACKET_HEADER[1] {
                    break;
                }
            }
            self.buffer.advance(1);
            skipped += 1;
        }
        skipped
    }
}
