//! Two-byte running-sum packet checksum.

/// Compute the two-byte checksum over a byte range.
///
/// Two u8 accumulators run over every byte: the first sums the bytes, the
/// second sums the first. The result is `[msb, lsb]` and trails every
/// packet on the wire, computed over header, descriptor, payload length,
/// and all field bytes.
pub fn checksum(bytes: &[u8]) -> [u8; 2] {
    let mut msb: u8 = 0;
    let mut lsb: u8 = 0;
    for &b in bytes {
        msb = msb.wrapping_add(b);
        lsb = lsb.wrapping_add(msb);
    }
    [msb, lsb]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(checksum(&[]), [0, 0]);
    }

    #[test]
    fn known_values() {
        assert_eq!(checksum(&[0x01]), [0x01, 0x01]);
        assert_eq!(checksum(&[0x01, 0x02]), [0x03, 0x04]);
        assert_eq!(checksum(&[0x75, 0x65]), [0xDA, 0x4F]);
    }

    #[test]
    fn deterministic() {
        let data = [0x75, 0x65, 0x02, 0x03, 0x00, 0xAA, 0xBB, 0xCC];
        assert_eq!(checksum(&data), checksum(&data));
    }

    #[test]
    fn accumulators_wrap() {
        let data = [0xFF; 64];
        // Must not panic in debug builds.
        let _ = checksum(&data);
    }

    #[test]
    fn single_bit_flip_changes_checksum() {
        let data = [0x75u8, 0x65, 0x02, 0x03, 0x00, 0xAA, 0xBB, 0xCC];
        let base = checksum(&data);
        for i in 0..data.len() {
            for bit in 0..8 {
                let mut corrupted = data;
                corrupted[i] ^= 1 << bit;
                assert_ne!(checksum(&corrupted), base, "flip at byte {i} bit {bit}");
            }
        }
    }
}
