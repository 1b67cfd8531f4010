//! Fixed-width integer packing and byte-order helpers.
//!
//! Every packer names its width and endianness. Nothing here guesses a width
//! from the value.

use crate::error::{Result, UtilError};

/// Pack an unsigned 16-bit integer, little-endian.
#[inline]
pub fn pack_uint16_le(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Pack a signed 32-bit integer, little-endian (two's complement).
#[inline]
pub fn pack_int32_le(value: i32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Pack a signed 32-bit integer, big-endian (two's complement).
#[inline]
pub fn pack_int32_be(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Pack an unsigned 32-bit integer, little-endian.
#[inline]
pub fn pack_uint32_le(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Pack an unsigned 32-bit integer, big-endian.
///
/// Takes a wider signed value so that callers holding job fields as `i64`
/// (timestamps, versions) get an `OutOfRange` error instead of a silent wrap.
pub fn pack_uint32_be(value: i64) -> Result<[u8; 4]> {
    let value = u32::try_from(value).map_err(|_| UtilError::out_of_range(value, "u32"))?;
    Ok(value.to_be_bytes())
}

/// Pack a 64-bit value as two 32-bit little-endian words, low word first.
///
/// The layout is identical to `u64::to_le_bytes`.
pub fn pack_int64_le(value: u64) -> [u8; 8] {
    let low = (value & 0xffff_ffff) as u32;
    let high = (value >> 32) as u32;

    let mut buf = [0u8; 8];
    buf[..4].copy_from_slice(&low.to_le_bytes());
    buf[4..].copy_from_slice(&high.to_le_bytes());
    buf
}

/// Return a reversed copy of `bytes`.
pub fn reverse_buffer(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Reverse the byte order of a hex string (e.g. display hash to internal order).
pub fn reverse_hex(hex_str: &str) -> Result<String> {
    let bytes = hex::decode(hex_str)?;
    Ok(hex::encode(reverse_buffer(&bytes)))
}

/// Hex-encode `bytes` after reversing them.
pub fn hex_from_reversed_buffer(bytes: &[u8]) -> String {
    hex::encode(reverse_buffer(bytes))
}

/// Swap a 32-byte hash between stratum wire order and display order.
///
/// Each 4-byte word is read big-endian and written back little-endian, then
/// the whole buffer is reversed. The net effect reverses the order of the
/// eight words while keeping the bytes inside each word in place.
pub fn reverse_byte_order(bytes: &[u8]) -> Result<[u8; 32]> {
    let bytes: &[u8; 32] = bytes.try_into().map_err(|_| UtilError::InvalidLength {
        expected: 32,
        actual: bytes.len(),
    })?;

    let mut swapped = [0u8; 32];
    for (src, dst) in bytes.chunks_exact(4).zip(swapped.chunks_exact_mut(4)) {
        let word = u32::from_be_bytes([src[0], src[1], src[2], src[3]]);
        dst.copy_from_slice(&word.to_le_bytes());
    }
    swapped.reverse();
    Ok(swapped)
}

/// Parse a hash hex string into a 32-byte buffer in reversed (internal) order.
///
/// Hashes shorter than 32 bytes are copied into the start of a zeroed buffer
/// before the reversal, so they end up right-aligned in the result.
pub fn uint256_buffer_from_hash(hex_str: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(hex_str)?;
    if bytes.len() > 32 {
        return Err(UtilError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        });
    }

    let mut buf = [0u8; 32];
    buf[..bytes.len()].copy_from_slice(&bytes);
    buf.reverse();
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_width_packers() {
        assert_eq!(pack_uint16_le(0x1234), [0x34, 0x12]);
        assert_eq!(pack_int32_le(-2), [0xfe, 0xff, 0xff, 0xff]);
        assert_eq!(pack_int32_be(0x0102_0304), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(pack_uint32_le(0xdead_beef), [0xef, 0xbe, 0xad, 0xde]);
        assert_eq!(pack_uint32_be(0xdead_beef).unwrap(), [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_pack_uint32_be_range() {
        assert_eq!(pack_uint32_be(0).unwrap(), [0, 0, 0, 0]);
        assert_eq!(pack_uint32_be(4_294_967_295).unwrap(), [0xff; 4]);

        assert!(matches!(
            pack_uint32_be(4_294_967_296),
            Err(UtilError::OutOfRange { .. })
        ));
        assert!(matches!(pack_uint32_be(-1), Err(UtilError::OutOfRange { .. })));
    }

    #[test]
    fn test_pack_int64_le_keeps_high_word() {
        assert_eq!(
            pack_int64_le(0x0102_0304_0506_0708),
            [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
        // Above 2^53, where a float-based split would lose bits
        let value = (1u64 << 60) + 1;
        assert_eq!(pack_int64_le(value), value.to_le_bytes());
    }

    #[test]
    fn test_reverse_buffer_does_not_touch_input() {
        let original = vec![1u8, 2, 3];
        let reversed = reverse_buffer(&original);
        assert_eq!(reversed, vec![3, 2, 1]);
        assert_eq!(original, vec![1, 2, 3]);
    }

    #[test]
    fn test_reverse_hex() {
        assert_eq!(reverse_hex("0a0b0c").unwrap(), "0c0b0a");
        assert!(matches!(reverse_hex("zz"), Err(UtilError::InvalidEncoding(_))));
        assert_eq!(hex_from_reversed_buffer(&[0x01, 0xff]), "ff01");
    }

    #[test]
    fn test_reverse_byte_order_swaps_words() {
        let mut input = [0u8; 32];
        for (i, b) in input.iter_mut().enumerate() {
            *b = i as u8;
        }
        let out = reverse_byte_order(&input).unwrap();

        // Last input word lands first, bytes inside it unchanged
        assert_eq!(&out[0..4], &[28, 29, 30, 31]);
        assert_eq!(&out[28..32], &[0, 1, 2, 3]);
    }

    #[test]
    fn test_reverse_byte_order_rejects_wrong_length() {
        assert_eq!(
            reverse_byte_order(&[0u8; 31]),
            Err(UtilError::InvalidLength { expected: 32, actual: 31 })
        );
        assert!(reverse_byte_order(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_uint256_buffer_from_full_hash() {
        let hash = "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";
        let buf = uint256_buffer_from_hash(hash).unwrap();
        assert_eq!(buf[0], 0x6f);
        assert_eq!(buf[31], 0x00);
        assert_eq!(hex_from_reversed_buffer(&buf), hash);
    }

    #[test]
    fn test_uint256_buffer_from_short_hash() {
        let buf = uint256_buffer_from_hash("0102").unwrap();
        let mut expected = [0u8; 32];
        expected[30] = 0x02;
        expected[31] = 0x01;
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_uint256_buffer_from_bad_hash() {
        assert!(matches!(
            uint256_buffer_from_hash("not hex"),
            Err(UtilError::InvalidEncoding(_))
        ));
        let too_long = "00".repeat(33);
        assert!(matches!(
            uint256_buffer_from_hash(&too_long),
            Err(UtilError::InvalidLength { expected: 32, actual: 33 })
        ));
    }

    proptest! {
        #[test]
        fn double_reverse_is_identity(bytes in prop::array::uniform32(any::<u8>())) {
            prop_assert_eq!(reverse_buffer(&reverse_buffer(&bytes)), bytes.to_vec());
        }

        #[test]
        fn reverse_byte_order_is_an_involution(bytes in prop::array::uniform32(any::<u8>())) {
            let once = reverse_byte_order(&bytes).unwrap();
            prop_assert_eq!(reverse_byte_order(&once).unwrap(), bytes);
        }
    }
}
