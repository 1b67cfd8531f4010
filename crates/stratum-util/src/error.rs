//! Error types for the codec and target primitives.

use thiserror::Error;

/// Errors returned by the packing, codec, target and subsidy functions.
///
/// Every variant describes bad input. None of them are transient, so callers
/// should reject the originating share or message instead of retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// A fixed-width buffer had the wrong size.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// An integer does not fit the requested width.
    #[error("Value {value} is out of range for {width}")]
    OutOfRange { value: String, width: &'static str },

    /// Malformed hex or compact-bits input.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Consensus parameters that would make the subsidy schedule undefined.
    #[error("Invalid consensus parameters: {0}")]
    InvalidParams(&'static str),
}

impl UtilError {
    pub(crate) fn out_of_range(value: impl ToString, width: &'static str) -> Self {
        UtilError::OutOfRange {
            value: value.to_string(),
            width,
        }
    }
}

impl From<hex::FromHexError> for UtilError {
    fn from(err: hex::FromHexError) -> Self {
        UtilError::InvalidEncoding(err.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, UtilError>;
