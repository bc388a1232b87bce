//! Error handling for encoding selection and decoding

use crate::Encoding;
use thiserror::Error;

/// Hashing-specific errors
///
/// Digest, HMAC and encode operations are total and never produce one of
/// these. Errors only arise where untyped input (an ordinal, a name, or
/// encoded text) is converted into the crate's typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// An ordinal or name that does not map to any [`Encoding`] member
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Text that is not valid in the requested encoding
    #[error("invalid {encoding} input: {reason}")]
    Decode {
        /// Encoding the text was decoded with
        encoding: Encoding,
        /// Underlying codec message
        reason: String,
    },

    /// A name that does not map to any algorithm, or an algorithm that has
    /// no construction for the requested operation
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl HashError {
    /// Create an `UnsupportedEncoding` error
    #[must_use]
    pub fn unsupported_encoding(value: impl Into<String>) -> Self {
        Self::UnsupportedEncoding(value.into())
    }

    /// Create a `Decode` error for the given encoding
    #[must_use]
    pub fn decode(encoding: Encoding, reason: impl std::fmt::Display) -> Self {
        Self::Decode {
            encoding,
            reason: reason.to_string(),
        }
    }

    /// Create an `UnsupportedAlgorithm` error
    #[must_use]
    pub fn unsupported_algorithm(value: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm(value.into())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            HashError::unsupported_encoding("7").to_string(),
            "unsupported encoding: 7"
        );
        assert_eq!(
            HashError::decode(Encoding::Hex, "Odd number of digits").to_string(),
            "invalid hex input: Odd number of digits"
        );
        assert_eq!(
            HashError::unsupported_algorithm("ripemd160").to_string(),
            "unsupported hash algorithm: ripemd160"
        );
    }
}
