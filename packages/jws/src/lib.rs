//! JSON Web Signature (JWS) verification for the compact serialization.
//!
//! This crate only verifies: given `header.payload.signature` and a
//! [`KeyProvider`], it returns the payload bytes if and only if the signature is
//! valid for the declared algorithm and the key the provider chose.
//!
//! - `none`, HS256, RS256, ES256 and ES512
//! - Tagged key material: a key of the wrong family is a [`JwsError::KeyType`]
//! - `alg: none` succeeds only when the provider returns [`NONE_KEY`]
//! - Single-key, closure and `kid`-indexed providers
//!
//! ```
//! use cryypt_jws::{JwsError, Key, provider_from_key, verify};
//!
//! let token = "eyJhbGciOiJIUzI1NiJ9.aGVsbG8.UYmO_lPAY5V0Wf4KZsfhiYs1SxqXPhxvjuYqellDV5A";
//!
//! let payload = verify(token, &provider_from_key(Key::hmac(b"secret")))?;
//! assert_eq!(payload, b"hello");
//!
//! let forged = verify(token, &provider_from_key(Key::hmac(b"wrong")));
//! assert!(matches!(forged, Err(JwsError::SignatureInvalid)));
//! # Ok::<(), JwsError>(())
//! ```

mod algorithms;
mod config;
pub(crate) mod crypto;
mod encoding;
mod error;
mod header;
mod key;
mod provider;
mod verifier;

pub use algorithms::Algorithm;
pub use config::VerifierConfig;
pub use encoding::{CompactParts, safe_decode};
pub use error::*;
pub use header::Header;
pub use key::{EcCurve, EcPublicKey, Key, NONE_KEY, NoneKey};
pub use provider::{FnProvider, KeyProvider, KeySet, KeySetError, SingleKey, provider_from_key};
pub use verifier::{VerifiedJws, Verifier, verify};
