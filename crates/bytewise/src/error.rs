use thiserror::Error;

/// Malformed input rejected by a parsing or decoding function.
///
/// Out-of-range offsets and missing needles are never reported through this
/// type; those are `None` or an empty range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is not a decimal real number.
    #[error("invalid real number string")]
    InvalidNumber,
    /// Hex input had an odd length or a non-hex digit at the given offset.
    #[error("invalid hex string at byte {0}")]
    InvalidHex(usize),
    /// Base64 input could not be decoded.
    #[error("invalid base64 string: {0}")]
    InvalidBase64(base64::DecodeError),
}

// Not `#[from]`: `DecodeError` implements `core::error::Error` only with
// base64's `std` feature.
impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidBase64(err)
    }
}
