//! Digest producers
//!
//! Each function hashes an in-memory byte slice in a single pass and wraps
//! the owned output in a [`Hash`]. They are total: no input makes them fail.

use crate::{mac, Hash, HashError, Result};
use ::digest::{Digest, ExtendableOutput, Update, XofReader};
use ::md5::Md5;
use ::sha1::Sha1;
use ::sha2::{Sha256, Sha512};
use ::sha3::Shake256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bytes read from the SHAKE-256 reader by [`sha3`]
pub const SHA3_OUTPUT_LEN: usize = 64;

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// MD5, 16 bytes
    Md5,
    /// SHA-1, 20 bytes
    Sha1,
    /// SHA-256, 32 bytes
    Sha256,
    /// SHA-512, 64 bytes
    Sha512,
    /// SHAKE-256 read out to 64 bytes
    Sha3,
}

impl Algorithm {
    /// Every supported algorithm
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
        Algorithm::Sha3,
    ];

    /// Canonical lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
            Algorithm::Sha3 => "sha3",
        }
    }

    /// Output length in bytes
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha512 => 64,
            Algorithm::Sha3 => SHA3_OUTPUT_LEN,
        }
    }

    /// Digest `data` with this algorithm
    #[must_use]
    pub fn digest(self, data: &[u8]) -> Hash {
        match self {
            Algorithm::Md5 => md5(data),
            Algorithm::Sha1 => sha1(data),
            Algorithm::Sha256 => sha256(data),
            Algorithm::Sha512 => sha512(data),
            Algorithm::Sha3 => sha3(data),
        }
    }

    /// HMAC of `data` keyed with `secret`, using this algorithm as the
    /// underlying digest
    ///
    /// # Errors
    ///
    /// Returns [`HashError::UnsupportedAlgorithm`] for [`Algorithm::Sha3`]:
    /// SHAKE-256 is an extendable-output function and has no HMAC
    /// construction.
    pub fn hmac(self, data: &[u8], secret: &[u8]) -> Result<Hash> {
        match self {
            Algorithm::Md5 => Ok(mac::hmac_md5(data, secret)),
            Algorithm::Sha1 => Ok(mac::hmac_sha1(data, secret)),
            Algorithm::Sha256 => Ok(mac::hmac_sha256(data, secret)),
            Algorithm::Sha512 => Ok(mac::hmac_sha512(data, secret)),
            Algorithm::Sha3 => Err(HashError::unsupported_algorithm("hmac-sha3")),
        }
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha512" => Ok(Algorithm::Sha512),
            "sha3" | "shake256" => Ok(Algorithm::Sha3),
            _ => {
                tracing::debug!(input = s, "rejected algorithm name");
                Err(HashError::unsupported_algorithm(s))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn fixed<D: Digest>(algorithm: Algorithm, data: &[u8]) -> Hash {
    let hash = Hash::from(D::digest(data).as_slice());
    tracing::trace!(%algorithm, input_len = data.len(), output_len = hash.len(), "computed digest");
    hash
}

/// MD5 checksum
#[must_use]
pub fn md5(data: &[u8]) -> Hash {
    fixed::<Md5>(Algorithm::Md5, data)
}

/// SHA-1 checksum
#[must_use]
pub fn sha1(data: &[u8]) -> Hash {
    fixed::<Sha1>(Algorithm::Sha1, data)
}

/// SHA2-256 checksum
#[must_use]
pub fn sha256(data: &[u8]) -> Hash {
    fixed::<Sha256>(Algorithm::Sha256, data)
}

/// SHA2-512 checksum
#[must_use]
pub fn sha512(data: &[u8]) -> Hash {
    fixed::<Sha512>(Algorithm::Sha512, data)
}

/// SHA-3 family checksum: 64 bytes of SHAKE-256 output
///
/// This is not SHA3-256. The output is the first [`SHA3_OUTPUT_LEN`] bytes
/// of the SHAKE-256 extendable-output function, and existing consumers rely
/// on that length.
#[must_use]
pub fn sha3(data: &[u8]) -> Hash {
    let mut shake = Shake256::default();
    shake.update(data);

    let mut out = vec![0u8; SHA3_OUTPUT_LEN];
    shake.finalize_xof().read(&mut out);

    tracing::trace!(algorithm = %Algorithm::Sha3, input_len = data.len(), output_len = out.len(), "computed digest");
    Hash::new(out)
}
