//! HMAC producers
//!
//! The underlying digest is chosen by type parameter; the named wrappers fix
//! it for the common cases. Secrets are raw key bytes and may be any length.

use crate::Hash;
use ::digest::{core_api::BlockSizeUser, Digest, KeyInit};
use ::hmac::{Mac, SimpleHmac};
use ::md5::Md5;
use ::sha1::Sha1;
use ::sha2::{Sha256, Sha512};

/// HMAC of `data` keyed with `secret` over the digest `D`
///
/// ```
/// use sha2::Sha256;
///
/// let mac = hasher::hmac::<Sha256>(b"hello", b"secretKey");
/// assert_eq!(mac, hasher::hmac_sha256(b"hello", b"secretKey"));
/// ```
#[must_use]
pub fn hmac<D>(data: &[u8], secret: &[u8]) -> Hash
where
    D: Digest + BlockSizeUser,
{
    let mut mac = match <SimpleHmac<D> as KeyInit>::new_from_slice(secret) {
        Ok(mac) => mac,
        // keys longer than the block size are hashed down, so no length is rejected
        Err(_) => unreachable!("HMAC accepts keys of any length"),
    };
    Mac::update(&mut mac, data);
    let hash = Hash::from(mac.finalize().into_bytes().as_slice());

    tracing::trace!(input_len = data.len(), output_len = hash.len(), "computed hmac");
    hash
}

/// HMAC-MD5
#[must_use]
pub fn hmac_md5(data: &[u8], secret: &[u8]) -> Hash {
    hmac::<Md5>(data, secret)
}

/// HMAC-SHA1
#[must_use]
pub fn hmac_sha1(data: &[u8], secret: &[u8]) -> Hash {
    hmac::<Sha1>(data, secret)
}

/// HMAC-SHA256
#[must_use]
pub fn hmac_sha256(data: &[u8], secret: &[u8]) -> Hash {
    hmac::<Sha256>(data, secret)
}

/// HMAC-SHA512
#[must_use]
pub fn hmac_sha512(data: &[u8], secret: &[u8]) -> Hash {
    hmac::<Sha512>(data, secret)
}
