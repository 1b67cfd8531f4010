//! Byte-level and numeric primitives for a stratum mining pool.
//!
//! This crate provides pure Rust implementations of:
//! - Fixed-width integer packing and hash byte-order conversion
//! - SHA256 and double SHA256
//! - Bitcoin varints, varstrings and script push encodings
//! - Compact "bits" to 256-bit target conversion and truncated difficulty
//! - Block subsidy for a slow-start, halving-schedule coin
//!
//! Every function is pure. The only configuration is [`ConsensusParams`],
//! passed explicitly to the subsidy calculation.

pub mod bytes;
pub mod error;
pub mod hash;
pub mod script;
pub mod subsidy;
pub mod target;
pub mod varint;

pub use bytes::{
    hex_from_reversed_buffer, pack_int32_be, pack_int32_le, pack_int64_le, pack_uint16_le,
    pack_uint32_be, pack_uint32_le, reverse_buffer, reverse_byte_order, reverse_hex,
    uint256_buffer_from_hash,
};
pub use error::{Result, UtilError};
pub use hash::{sha256, sha256d};
pub use script::{mining_key_to_script, pubkey_to_script, serialize_number, serialize_string};
pub use subsidy::ConsensusParams;
pub use target::{
    bignum_from_bits_buffer, bignum_from_bits_hex, bignum_from_buffer, buffer_to_compact_bits,
    convert_bits_to_buff, get_truncated_diff, shift_max256_right, target_from_biguint,
    CompactBits,
};
pub use varint::{decode_var_int, encode_var_int, var_int_buffer, var_string_buffer};

pub use num_bigint::BigUint;
