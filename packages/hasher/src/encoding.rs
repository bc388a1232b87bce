//! Text encodings for hash values
//!
//! [`Encoding`] is a closed set: every member maps to exactly one transcoder
//! through an exhaustive `match`, so an unsupported encoding cannot be
//! represented once a value has been constructed. Untyped selectors (raw
//! ordinals, names from configuration) go through [`TryFrom<u8>`] or
//! [`FromStr`], which reject anything outside the set with
//! [`HashError::UnsupportedEncoding`].

use crate::{HashError, Result};
use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE},
    Engine as _,
};
use data_encoding::BASE32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported text encodings
///
/// Ordinals are stable and part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Encoding {
    /// Standard Base64 alphabet, `=` padded, no line wrapping
    #[serde(rename = "base64")]
    Base64 = 0,
    /// URL and filename safe Base64 alphabet (`-` and `_`), `=` padded
    #[serde(rename = "base64url", alias = "base64urlsafe")]
    Base64UrlSafe = 1,
    /// RFC 4648 Base32 alphabet, `=` padded to a multiple of 8 characters
    #[serde(rename = "base32")]
    Base32 = 2,
    /// Lowercase hexadecimal, two characters per byte
    #[serde(rename = "hex")]
    Hex = 3,
}

impl Encoding {
    /// Every member in ordinal order
    pub const ALL: [Encoding; 4] = [
        Encoding::Base64,
        Encoding::Base64UrlSafe,
        Encoding::Base32,
        Encoding::Hex,
    ];

    /// Stable ordinal of this encoding
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Canonical lowercase name, accepted back by [`FromStr`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Base64 => "base64",
            Encoding::Base64UrlSafe => "base64url",
            Encoding::Base32 => "base32",
            Encoding::Hex => "hex",
        }
    }

    /// Encode `bytes` with this encoding's transcoder
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Base64 => STANDARD.encode(bytes),
            Encoding::Base64UrlSafe => URL_SAFE.encode(bytes),
            Encoding::Base32 => BASE32.encode(bytes),
            Encoding::Hex => hex::encode(bytes),
        }
    }

    /// Decode `text` produced by this encoding's transcoder
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Decode`] if `text` contains characters outside
    /// the alphabet, has invalid padding, or has an invalid length.
    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        let decoded = match self {
            Encoding::Base64 => STANDARD.decode(text).map_err(|e| HashError::decode(self, e)),
            Encoding::Base64UrlSafe => URL_SAFE.decode(text).map_err(|e| HashError::decode(self, e)),
            Encoding::Base32 => BASE32
                .decode(text.as_bytes())
                .map_err(|e| HashError::decode(self, e)),
            Encoding::Hex => hex::decode(text).map_err(|e| HashError::decode(self, e)),
        };

        if let Err(err) = &decoded {
            tracing::debug!(encoding = %self, input_len = text.len(), error = %err, "decode rejected input");
        }
        decoded
    }
}

/// Encode `bytes` with the transcoder selected by `encoding`
#[must_use]
pub fn encode(bytes: &[u8], encoding: Encoding) -> String {
    encoding.encode(bytes)
}

/// Decode `text` with the transcoder selected by `encoding`
///
/// # Errors
///
/// Returns [`HashError::Decode`] if `text` is not valid for `encoding`.
pub fn decode(text: &str, encoding: Encoding) -> Result<Vec<u8>> {
    encoding.decode(text)
}

impl TryFrom<u8> for Encoding {
    type Error = HashError;

    fn try_from(ordinal: u8) -> Result<Self> {
        Encoding::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or_else(|| {
                tracing::debug!(ordinal, "rejected encoding ordinal");
                HashError::unsupported_encoding(ordinal.to_string())
            })
    }
}

impl From<Encoding> for u8 {
    fn from(encoding: Encoding) -> Self {
        encoding.ordinal()
    }
}

impl FromStr for Encoding {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "base64" => Ok(Encoding::Base64),
            "base64url" | "base64urlsafe" => Ok(Encoding::Base64UrlSafe),
            "base32" => Ok(Encoding::Base32),
            "hex" => Ok(Encoding::Hex),
            _ => {
                tracing::debug!(input = s, "rejected encoding name");
                Err(HashError::unsupported_encoding(s))
            }
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
