//! Compact "bits" to 256-bit target conversion.
//!
//! The compact form is `[exponent][mantissa (3 bytes)]`, where the exponent is
//! the byte length of the value and the mantissa holds its most significant
//! bytes. Target = mantissa * 256^(exponent - 3).
//!
//! Targets are 32-byte big-endian buffers.

use core::fmt;

use num_bigint::BigUint;
use tracing::trace;

use crate::error::{Result, UtilError};

/// A 4-byte compact difficulty encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompactBits([u8; 4]);

impl CompactBits {
    /// Wrap a 4-byte buffer. Any other length is `InvalidEncoding`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 4] = bytes.try_into().map_err(|_| {
            UtilError::InvalidEncoding(format!(
                "compact bits must be 4 bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(CompactBits(bytes))
    }

    /// Parse from 8 hex characters, e.g. the `bits` field of a block template.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(hex_str)?)
    }

    /// Build from the header-field form, exponent in the high byte.
    pub fn from_u32(bits: u32) -> Self {
        CompactBits(bits.to_be_bytes())
    }

    pub fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Byte length of the encoded value.
    pub fn exponent(&self) -> u8 {
        self.0[0]
    }

    pub fn mantissa(&self) -> u32 {
        u32::from_be_bytes([0, self.0[1], self.0[2], self.0[3]])
    }

    /// Decode to an unsigned big integer.
    ///
    /// Exponents below 3 mean the value is shorter than the mantissa field, so
    /// the mantissa is shifted right by the missing bytes instead of being
    /// multiplied by a negative power.
    pub fn to_biguint(&self) -> BigUint {
        let exponent = self.exponent() as usize;
        let mantissa = BigUint::from(self.mantissa());

        if exponent >= 3 {
            mantissa << (8 * (exponent - 3))
        } else {
            trace!(bits = %self, exponent, "compact exponent below 3, truncating mantissa");
            mantissa >> (8 * (3 - exponent))
        }
    }

    /// Decode to a right-aligned 32-byte target.
    pub fn to_target(&self) -> Result<[u8; 32]> {
        target_from_biguint(&self.to_biguint())
    }
}

impl fmt::Display for CompactBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// `(2^256 - 1) >> shift` as a 32-byte big-endian buffer.
///
/// Shifts of 256 or more give zero.
pub fn shift_max256_right(shift: u32) -> [u8; 32] {
    if shift >= 256 {
        return [0u8; 32];
    }

    let mut buf = [0xffu8; 32];
    let zero_bytes = (shift / 8) as usize;
    buf[..zero_bytes].fill(0);
    buf[zero_bytes] = 0xff >> (shift % 8);
    buf
}

/// Encode a big-endian unsigned value in compact form.
///
/// Leading zero bytes are dropped. If the top bit of the first remaining byte
/// is set a `0x00` is prepended so the mantissa never carries the sign bit.
/// The length byte is then prepended and the result cut or zero-padded to 4
/// bytes.
pub fn buffer_to_compact_bits(bytes: &[u8]) -> Result<CompactBits> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let minimal = &bytes[start..];

    let sign_pad = minimal.first().is_some_and(|&b| b > 0x7f);
    let length = minimal.len() + usize::from(sign_pad);
    let exponent =
        u8::try_from(length).map_err(|_| UtilError::out_of_range(length, "compact exponent"))?;

    let mut compact = [0u8; 4];
    compact[0] = exponent;

    let mantissa = sign_pad
        .then_some(0u8)
        .into_iter()
        .chain(minimal.iter().copied());
    for (dst, src) in compact[1..].iter_mut().zip(mantissa) {
        *dst = src;
    }

    Ok(CompactBits(compact))
}

/// Read a big-endian buffer as an unsigned big integer.
pub fn bignum_from_buffer(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Decode a 4-byte compact buffer to an unsigned big integer.
pub fn bignum_from_bits_buffer(bits: &[u8]) -> Result<BigUint> {
    Ok(CompactBits::from_slice(bits)?.to_biguint())
}

/// Decode compact bits given as hex.
pub fn bignum_from_bits_hex(bits_hex: &str) -> Result<BigUint> {
    Ok(CompactBits::from_hex(bits_hex)?.to_biguint())
}

/// Decode compact bits into a right-aligned 32-byte target.
pub fn convert_bits_to_buff(bits: &[u8]) -> Result<[u8; 32]> {
    CompactBits::from_slice(bits)?.to_target()
}

/// Right-align `value` in a zeroed 32-byte buffer.
pub fn target_from_biguint(value: &BigUint) -> Result<[u8; 32]> {
    if value.bits() > 256 {
        return Err(UtilError::out_of_range(value.to_str_radix(16), "uint256"));
    }

    let bytes = value.to_bytes_be();
    let mut target = [0u8; 32];
    target[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(target)
}

/// Target for a pool difficulty expressed as a right shift of the max value.
///
/// Goes through the compact form on purpose, so the result carries the same
/// 3-byte mantissa precision as targets sent over the wire. It is never larger
/// than `(2^256 - 1) >> shift`.
pub fn get_truncated_diff(shift: u32) -> Result<[u8; 32]> {
    let max = shift_max256_right(shift);
    buffer_to_compact_bits(&max)?.to_target()
}
