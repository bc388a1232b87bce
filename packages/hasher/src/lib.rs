//! Common digests, HMAC and text encodings behind a single hash value type
//!
//! Producers compute a digest or MAC over a byte slice and return a [`Hash`];
//! the hash then projects itself into whichever text form the caller needs.
//!
//! ```
//! let hash = hasher::sha256(b"Before software can be reusable it first has to be usable.");
//! assert_eq!(
//!     hash.to_hex(),
//!     "9ce117fe3d1372fbf895efc21c008c1237174baab238f8815a9a3bb58d259a06"
//! );
//!
//! let mac = hasher::hmac_sha256(b"payload", b"secret");
//! assert!(hasher::equals(mac.as_bytes(), mac.clone().as_bytes()));
//! println!("{}", mac.to_base64_url_safe());
//! ```
//!
//! Supported encodings are Base64, Base64 URL-safe, Base32 and Hex. Anything
//! else can be produced with [`Hash::encode_with`].

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod compare;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod mac;

// Re-export error types
pub use error::{HashError, Result};

pub use algorithm::{md5, sha1, sha256, sha3, sha512, Algorithm, SHA3_OUTPUT_LEN};
pub use compare::equals;
pub use encoding::{decode, encode, Encoding};
pub use hash::Hash;
pub use mac::{hmac, hmac_md5, hmac_sha1, hmac_sha256, hmac_sha512};
