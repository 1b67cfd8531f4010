//! Script push encodings and simple output scripts.
//!
//! These produce the byte layouts that go into coinbase scriptSigs (height,
//! pool tag) and into the outputs paying the pool's own keys.

use crate::error::{Result, UtilError};
use crate::varint::var_string_buffer;

const OP_1_BASE: u8 = 0x50;
const OP_DUP: u8 = 0x76;
const OP_HASH160: u8 = 0xa9;
const OP_EQUALVERIFY: u8 = 0x88;
const OP_CHECKSIG: u8 = 0xac;

/// Encode a number as a script push.
///
/// 1 through 16 become the single opcodes `OP_1`..`OP_16`. Everything else,
/// zero included, is a length byte followed by the minimal little-endian
/// magnitude. An extra byte is added when the top bit of the last data byte
/// would otherwise be read as a sign. Negative values carry that sign bit.
pub fn serialize_number(n: i64) -> Vec<u8> {
    if (1..=16).contains(&n) {
        return vec![OP_1_BASE + n as u8];
    }

    let mut data = Vec::with_capacity(9);
    let mut magnitude = n.unsigned_abs();
    while magnitude > 0 {
        data.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }

    let top = data.last().copied();
    match top {
        None => data.push(0x00),
        Some(byte) if byte & 0x80 != 0 => data.push(if n < 0 { 0x80 } else { 0x00 }),
        Some(byte) if n < 0 => {
            if let Some(last) = data.last_mut() {
                *last = byte | 0x80;
            }
        }
        Some(_) => {}
    }

    let mut buf = Vec::with_capacity(data.len() + 1);
    buf.push(data.len() as u8);
    buf.extend_from_slice(&data);
    buf
}

/// Encode a byte string with a length prefix.
///
/// The size classes are `< 253` (one length byte), `< 0x10000` (`0xfd` plus
/// two bytes), `< 0x100000000` (`0xfe` plus four bytes) and otherwise `0xff`
/// plus eight bytes. Those are exactly the varint classes, so this is the
/// same layout as [`var_string_buffer`].
pub fn serialize_string(data: &[u8]) -> Vec<u8> {
    var_string_buffer(data)
}

/// Build a pay-to-pubkey script from a 33-byte compressed key in hex.
pub fn pubkey_to_script(pubkey_hex: &str) -> Result<[u8; 35]> {
    let key = hex::decode(pubkey_hex)?;
    if key.len() != 33 {
        return Err(UtilError::InvalidLength {
            expected: 33,
            actual: key.len(),
        });
    }

    let mut script = [0u8; 35];
    script[0] = 0x21;
    script[1..34].copy_from_slice(&key);
    script[34] = OP_CHECKSIG;
    Ok(script)
}

/// Build a P2PKH script from a 20-byte key hash in hex.
pub fn mining_key_to_script(key_hash_hex: &str) -> Result<[u8; 25]> {
    let hash = hex::decode(key_hash_hex)?;
    if hash.len() != 20 {
        return Err(UtilError::InvalidLength {
            expected: 20,
            actual: hash.len(),
        });
    }

    let mut script = [0u8; 25];
    script[..3].copy_from_slice(&[OP_DUP, OP_HASH160, 0x14]);
    script[3..23].copy_from_slice(&hash);
    script[23] = OP_EQUALVERIFY;
    script[24] = OP_CHECKSIG;
    Ok(script)
}
