//! JavaScript bindings for the codec and target functions.
//!
//! Names match the pool's existing `util` module so call sites can switch
//! over without renaming. Buffers cross as `Uint8Array`, big integers as
//! `BigInt`.

use js_sys::BigInt;
use stratum_util::{self as util, BigUint, UtilError};
use wasm_bindgen::prelude::*;

/// Largest integer a JS number holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub(crate) fn to_js_error(err: UtilError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Check that a JS number is an integer within `[min, max]`.
pub(crate) fn checked_integer(value: f64, min: f64, max: f64, width: &'static str) -> Result<f64, UtilError> {
    if !value.is_finite() || value.fract() != 0.0 || value < min || value > max {
        return Err(UtilError::OutOfRange {
            value: value.to_string(),
            width,
        });
    }
    Ok(value)
}

fn unsigned(value: f64) -> Result<u64, UtilError> {
    checked_integer(value, 0.0, MAX_SAFE_INTEGER, "safe unsigned integer").map(|v| v as u64)
}

fn to_bigint(value: &BigUint) -> Result<BigInt, JsValue> {
    let literal = format!("0x{}", value.to_str_radix(16));
    BigInt::new(&JsValue::from_str(&literal)).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn sha256(data: &[u8]) -> Vec<u8> {
    util::sha256(data).to_vec()
}

#[wasm_bindgen]
pub fn sha256d(data: &[u8]) -> Vec<u8> {
    util::sha256d(data).to_vec()
}

#[wasm_bindgen(js_name = reverseBuffer)]
pub fn reverse_buffer(data: &[u8]) -> Vec<u8> {
    util::reverse_buffer(data)
}

#[wasm_bindgen(js_name = reverseHex)]
pub fn reverse_hex(hex: &str) -> Result<String, JsValue> {
    util::reverse_hex(hex).map_err(to_js_error)
}

#[wasm_bindgen(js_name = reverseByteOrder)]
pub fn reverse_byte_order(data: &[u8]) -> Result<Vec<u8>, JsValue> {
    util::reverse_byte_order(data)
        .map(|b| b.to_vec())
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = uint256BufferFromHash)]
pub fn uint256_buffer_from_hash(hex: &str) -> Result<Vec<u8>, JsValue> {
    util::uint256_buffer_from_hash(hex)
        .map(|b| b.to_vec())
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = hexFromReversedBuffer)]
pub fn hex_from_reversed_buffer(data: &[u8]) -> String {
    util::hex_from_reversed_buffer(data)
}

#[wasm_bindgen(js_name = varIntBuffer)]
pub fn var_int_buffer(n: f64) -> Result<Vec<u8>, JsValue> {
    let n = unsigned(n).map_err(to_js_error)?;
    Ok(util::var_int_buffer(n))
}

#[wasm_bindgen(js_name = varStringBuffer)]
pub fn var_string_buffer(s: &str) -> Vec<u8> {
    util::var_string_buffer(s.as_bytes())
}

#[wasm_bindgen(js_name = serializeNumber)]
pub fn serialize_number(n: f64) -> Result<Vec<u8>, JsValue> {
    let n = checked_integer(n, -MAX_SAFE_INTEGER, MAX_SAFE_INTEGER, "safe integer")
        .map_err(to_js_error)?;
    Ok(util::serialize_number(n as i64))
}

#[wasm_bindgen(js_name = serializeString)]
pub fn serialize_string(s: &str) -> Vec<u8> {
    util::serialize_string(s.as_bytes())
}

#[wasm_bindgen(js_name = packUInt16LE)]
pub fn pack_uint16_le(num: f64) -> Result<Vec<u8>, JsValue> {
    let num = checked_integer(num, 0.0, u16::MAX as f64, "u16").map_err(to_js_error)?;
    Ok(util::pack_uint16_le(num as u16).to_vec())
}

#[wasm_bindgen(js_name = packInt32LE)]
pub fn pack_int32_le(num: f64) -> Result<Vec<u8>, JsValue> {
    let num = checked_integer(num, i32::MIN as f64, i32::MAX as f64, "i32").map_err(to_js_error)?;
    Ok(util::pack_int32_le(num as i32).to_vec())
}

#[wasm_bindgen(js_name = packInt32BE)]
pub fn pack_int32_be(num: f64) -> Result<Vec<u8>, JsValue> {
    let num = checked_integer(num, i32::MIN as f64, i32::MAX as f64, "i32").map_err(to_js_error)?;
    Ok(util::pack_int32_be(num as i32).to_vec())
}

#[wasm_bindgen(js_name = packUInt32LE)]
pub fn pack_uint32_le(num: f64) -> Result<Vec<u8>, JsValue> {
    let num = checked_integer(num, 0.0, u32::MAX as f64, "u32").map_err(to_js_error)?;
    Ok(util::pack_uint32_le(num as u32).to_vec())
}

#[wasm_bindgen(js_name = packUInt32BE)]
pub fn pack_uint32_be(num: f64) -> Result<Vec<u8>, JsValue> {
    // Range is checked by the core packer; only reject fractions and NaN here
    let num = checked_integer(num, f64::MIN, f64::MAX, "u32").map_err(to_js_error)?;
    util::pack_uint32_be(num as i64)
        .map(|b| b.to_vec())
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = packInt64LE)]
pub fn pack_int64_le(num: f64) -> Result<Vec<u8>, JsValue> {
    let num = unsigned(num).map_err(to_js_error)?;
    Ok(util::pack_int64_le(num).to_vec())
}

#[wasm_bindgen(js_name = pubkeyToScript)]
pub fn pubkey_to_script(key: &str) -> Result<Vec<u8>, JsValue> {
    util::pubkey_to_script(key)
        .map(|s| s.to_vec())
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = miningKeyToScript)]
pub fn mining_key_to_script(key: &str) -> Result<Vec<u8>, JsValue> {
    util::mining_key_to_script(key)
        .map(|s| s.to_vec())
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = shiftMax256Right)]
pub fn shift_max256_right(shift: u32) -> Vec<u8> {
    util::shift_max256_right(shift).to_vec()
}

#[wasm_bindgen(js_name = bufferToCompactBits)]
pub fn buffer_to_compact_bits(data: &[u8]) -> Result<Vec<u8>, JsValue> {
    util::buffer_to_compact_bits(data)
        .map(|bits| bits.as_bytes().to_vec())
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = bignumFromBuffer)]
pub fn bignum_from_buffer(data: &[u8]) -> Result<BigInt, JsValue> {
    to_bigint(&util::bignum_from_buffer(data))
}

#[wasm_bindgen(js_name = bignumFromBitsBuffer)]
pub fn bignum_from_bits_buffer(bits: &[u8]) -> Result<BigInt, JsValue> {
    let value = util::bignum_from_bits_buffer(bits).map_err(to_js_error)?;
    to_bigint(&value)
}

#[wasm_bindgen(js_name = bignumFromBitsHex)]
pub fn bignum_from_bits_hex(bits: &str) -> Result<BigInt, JsValue> {
    let value = util::bignum_from_bits_hex(bits).map_err(to_js_error)?;
    to_bigint(&value)
}

#[wasm_bindgen(js_name = convertBitsToBuff)]
pub fn convert_bits_to_buff(bits: &[u8]) -> Result<Vec<u8>, JsValue> {
    util::convert_bits_to_buff(bits)
        .map(|t| t.to_vec())
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = getTruncatedDiff)]
pub fn get_truncated_diff(shift: u32) -> Result<Vec<u8>, JsValue> {
    util::get_truncated_diff(shift)
        .map(|t| t.to_vec())
        .map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_integer() {
        assert_eq!(checked_integer(5.0, 0.0, 10.0, "u8"), Ok(5.0));
        assert!(checked_integer(5.5, 0.0, 10.0, "u8").is_err());
        assert!(checked_integer(-1.0, 0.0, 10.0, "u8").is_err());
        assert!(checked_integer(11.0, 0.0, 10.0, "u8").is_err());
        assert!(checked_integer(f64::NAN, 0.0, 10.0, "u8").is_err());
        assert!(checked_integer(f64::INFINITY, f64::MIN, f64::MAX, "u32").is_err());
    }

    #[test]
    fn test_unsigned_rejects_unsafe_integers() {
        assert_eq!(unsigned(MAX_SAFE_INTEGER), Ok(9_007_199_254_740_991));
        assert!(matches!(
            unsigned(MAX_SAFE_INTEGER + 2.0),
            Err(UtilError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_pack_uint32_be_path_out_of_range() {
        // Same path the binding takes, minus the JsValue conversion
        let too_big = checked_integer(4_294_967_296.0, f64::MIN, f64::MAX, "u32").unwrap();
        assert!(util::pack_uint32_be(too_big as i64).is_err());
        let negative = checked_integer(-1.0, f64::MIN, f64::MAX, "u32").unwrap();
        assert!(util::pack_uint32_be(negative as i64).is_err());
    }
}
