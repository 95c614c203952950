//! Per-algorithm signature checks.
//!
//! Each function takes the exact signing input and the decoded signature and
//! returns `Ok(())` only when the signature is valid. All failures collapse to
//! [`crate::JwsError::SignatureInvalid`].

pub(crate) mod ecdsa_verification;
pub(crate) mod hmac_sha256;
pub(crate) mod rs256_verification;
