//! Hash value type with encoding projections

use crate::compare::equals;
use crate::encoding::{decode, encode};
use crate::{Encoding, HashError, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Output of a digest or MAC computation
///
/// Owns its bytes and never changes after construction. Text forms are
/// produced on demand by the projection methods. Equality is constant-time.
#[derive(Clone, Default)]
pub struct Hash {
    bytes: Vec<u8>,
}

impl Hash {
    /// Wrap raw digest bytes
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Parse a hash from its text form in the given encoding
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Decode`] if `text` is not valid for `encoding`.
    pub fn from_encoded(text: &str, encoding: Encoding) -> Result<Self> {
        decode(text, encoding).map(Self::new)
    }

    /// Get the raw bytes of the hash
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the hash, returning its bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Length of the hash in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the hash holds no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Standard Base64, padded
    #[must_use]
    pub fn to_base64(&self) -> String {
        encode(&self.bytes, Encoding::Base64)
    }

    /// URL-safe Base64, padded
    #[must_use]
    pub fn to_base64_url_safe(&self) -> String {
        encode(&self.bytes, Encoding::Base64UrlSafe)
    }

    /// RFC 4648 Base32, padded
    #[must_use]
    pub fn to_base32(&self) -> String {
        encode(&self.bytes, Encoding::Base32)
    }

    /// Lowercase hexadecimal
    #[must_use]
    pub fn to_hex(&self) -> String {
        encode(&self.bytes, Encoding::Hex)
    }

    /// Text form in an encoding chosen at runtime
    #[must_use]
    pub fn encode(&self, encoding: Encoding) -> String {
        encode(&self.bytes, encoding)
    }

    /// Text form produced by a caller-supplied transcoder
    ///
    /// The transcoder's output is returned as is.
    ///
    /// ```
    /// let bits = hasher::Hash::from(*b"\x14\xfb").encode_with(|bytes| {
    ///     bytes.iter().map(|b| format!("{b:08b}")).collect::<Vec<_>>().join(" ")
    /// });
    /// assert_eq!(bits, "00010100 11111011");
    /// ```
    pub fn encode_with<F>(&self, transcoder: F) -> String
    where
        F: FnOnce(&[u8]) -> String,
    {
        transcoder(&self.bytes)
    }

    /// Check this hash against expected bytes in constant time
    #[must_use]
    pub fn verify(&self, expected: &[u8]) -> bool {
        equals(&self.bytes, expected)
    }
}

impl PartialEq for Hash {
    fn eq(&self, other: &Self) -> bool {
        equals(&self.bytes, &other.bytes)
    }
}

impl Eq for Hash {}

impl From<Vec<u8>> for Hash {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for Hash {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Hash {
    fn from(bytes: [u8; N]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl From<Hash> for Vec<u8> {
    fn from(hash: Hash) -> Self {
        hash.bytes
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Hash").field(&self.to_hex()).finish()
    }
}

impl FromStr for Hash {
    type Err = HashError;

    /// Parse lowercase or uppercase hexadecimal
    fn from_str(s: &str) -> Result<Self> {
        Self::from_encoded(s, Encoding::Hex)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(bytes: &[u8]) -> String {
        let digits: Vec<String> = bytes.iter().map(|b| format!("{b:08b}")).collect();
        format!("[{}]", digits.join(" "))
    }

    #[test]
    fn projections_match_reference_vectors() {
        let hash = Hash::from(*b"\x14\xfb\x9c\x03\xd9\x7e");
        assert_eq!(hash.to_base64(), "FPucA9l+");
        assert_eq!(hash.to_base64_url_safe(), "FPucA9l-");
        assert_eq!(hash.to_base32(), "CT5ZYA6ZPY======");
        assert_eq!(hash.to_hex(), "14fb9c03d97e");

        let hash = Hash::from(b"foobar".as_slice());
        assert_eq!(hash.to_base64(), "Zm9vYmFy");
        assert_eq!(hash.to_base32(), "MZXW6YTBOI======");
        assert_eq!(hash.to_hex(), "666f6f626172");
    }

    #[test]
    fn named_projections_agree_with_encode() {
        let hash = Hash::from(*b"fooba");
        assert_eq!(hash.encode(Encoding::Base64), hash.to_base64());
        assert_eq!(hash.encode(Encoding::Base64UrlSafe), hash.to_base64_url_safe());
        assert_eq!(hash.encode(Encoding::Base32), hash.to_base32());
        assert_eq!(hash.encode(Encoding::Hex), hash.to_hex());
    }

    #[test]
    fn empty_hash_projects_to_empty_strings() {
        let hash = Hash::default();
        assert!(hash.is_empty());
        for encoding in Encoding::ALL {
            assert_eq!(hash.encode(encoding), "");
        }
        assert_eq!(hash.encode_with(binary), "[]");
    }

    #[test]
    fn custom_transcoder() {
        assert_eq!(
            Hash::from(*b"foo").encode_with(binary),
            "[01100110 01101111 01101111]"
        );
        assert_eq!(
            Hash::from(*b"\x14\xfb\x9c\x03").encode_with(binary),
            "[00010100 11111011 10011100 00000011]"
        );
    }

    #[test]
    fn owns_its_bytes() {
        let mut source = vec![1u8, 2, 3];
        let hash = Hash::from(source.as_slice());
        source[0] = 9;
        assert_eq!(hash.as_bytes(), &[1, 2, 3]);
        assert_eq!(hash.len(), 3);
        assert_eq!(Vec::from(hash.clone()), vec![1, 2, 3]);
        assert_eq!(hash.into_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn equality_and_verify() {
        let a = Hash::from(*b"tag");
        assert_eq!(a, Hash::from(b"tag".to_vec()));
        assert_ne!(a, Hash::from(*b"tah"));
        assert_ne!(a, Hash::from(*b"tags"));
        assert!(a.verify(b"tag"));
        assert!(!a.verify(b"ta"));
    }

    #[test]
    fn parses_encoded_text() {
        let hash = Hash::from_encoded("CT5ZYA6ZPY======", Encoding::Base32).expect("valid base32");
        assert_eq!(hash.to_hex(), "14fb9c03d97e");

        let parsed: Hash = "14FB9C03D97E".parse().expect("valid hex");
        assert_eq!(parsed, hash);

        assert!(matches!(
            "14fb9".parse::<Hash>(),
            Err(HashError::Decode { encoding: Encoding::Hex, .. })
        ));
    }

    #[test]
    fn display_and_debug_use_hex() {
        let hash = Hash::from(*b"foo");
        assert_eq!(hash.to_string(), "666f6f");
        assert_eq!(format!("{hash:?}"), r#"Hash("666f6f")"#);
    }

    #[test]
    fn serde_round_trip_as_hex() {
        let hash = Hash::from(*b"foo");
        let json = serde_json::to_string(&hash).expect("serialize");
        assert_eq!(json, r#""666f6f""#);
        let back: Hash = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, hash);
        assert!(serde_json::from_str::<Hash>(r#""xyz""#).is_err());
    }
}
