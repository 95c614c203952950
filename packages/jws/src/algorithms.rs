//! Supported JWS signature algorithms

use crate::error::JwsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of algorithms the verifier understands.
///
/// Anything else found in a header's `alg` is rejected with
/// [`JwsError::UnknownAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Unsigned token, only accepted with the [`crate::NONE_KEY`] sentinel.
    #[serde(rename = "none")]
    None,
    /// HMAC with SHA-256
    #[serde(rename = "HS256")]
    Hs256,
    /// RSASSA-PKCS1-v1_5 with SHA-256
    #[serde(rename = "RS256")]
    Rs256,
    /// ECDSA on P-256 with SHA-256
    #[serde(rename = "ES256")]
    Es256,
    /// ECDSA on P-521 with SHA-512
    #[serde(rename = "ES512")]
    Es512,
}

impl Algorithm {
    /// Every supported algorithm.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::None,
        Algorithm::Hs256,
        Algorithm::Rs256,
        Algorithm::Es256,
        Algorithm::Es512,
    ];

    /// Header `alg` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::None => "none",
            Algorithm::Hs256 => "HS256",
            Algorithm::Rs256 => "RS256",
            Algorithm::Es256 => "ES256",
            Algorithm::Es512 => "ES512",
        }
    }
}

impl FromStr for Algorithm {
    type Err = JwsError;

    /// Exact, case-sensitive match against the wire names.
    fn from_str(alg: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == alg)
            .ok_or_else(|| JwsError::UnknownAlgorithm(alg.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
