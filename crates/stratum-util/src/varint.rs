//! Bitcoin variable-length integers and strings.

use crate::error::{Result, UtilError};

/// Encode a variable-length integer (Bitcoin varint) into `output`.
pub fn encode_var_int(value: u64, output: &mut Vec<u8>) {
    if value < 0xfd {
        output.push(value as u8);
    } else if value <= 0xffff {
        output.push(0xfd);
        output.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= 0xffff_ffff {
        output.push(0xfe);
        output.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        output.push(0xff);
        output.extend_from_slice(&value.to_le_bytes());
    }
}

/// Encode a varint into a freshly allocated buffer.
pub fn var_int_buffer(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(9);
    encode_var_int(value, &mut buf);
    buf
}

/// Decode a varint from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed. Non-minimal encodings
/// are accepted.
pub fn decode_var_int(bytes: &[u8]) -> Result<(u64, usize)> {
    let marker = *bytes.first().ok_or(UtilError::InvalidLength {
        expected: 1,
        actual: 0,
    })?;

    let width = match marker {
        0xfd => 2,
        0xfe => 4,
        0xff => 8,
        small => return Ok((small as u64, 1)),
    };

    let payload = bytes.get(1..=width).ok_or(UtilError::InvalidLength {
        expected: width + 1,
        actual: bytes.len(),
    })?;

    let mut le = [0u8; 8];
    le[..width].copy_from_slice(payload);
    Ok((u64::from_le_bytes(le), width + 1))
}

/// Encode a byte string prefixed with its varint length.
pub fn var_string_buffer(data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(data.len() + 9);
    encode_var_int(data.len() as u64, &mut buf);
    buf.extend_from_slice(data);
    buf
}
