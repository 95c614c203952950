//! JWS protected header model

use crate::{
    algorithms::Algorithm,
    encoding::safe_decode,
    error::{JwsError, JwsResult},
};
use serde::{Deserialize, Serialize};

/// Decoded JWS protected header.
///
/// `alg` is kept verbatim so an unsupported value can be reported as-is; it is
/// only matched against [`Algorithm`] at dispatch time. Every other member is
/// opaque metadata for the [`crate::KeyProvider`]; the verifier never acts on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Declared signature algorithm (untrusted)
    pub alg: String,
    /// Token type hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Content type hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cty: Option<String>,
    /// JWK Set URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jku: Option<String>,
    /// Embedded JSON Web Key, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwk: Option<serde_json::Value>,
    /// X.509 certificate URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x5u: Option<String>,
    /// X.509 certificate SHA-1 thumbprint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x5t: Option<String>,
    /// X.509 certificate SHA-256 thumbprint
    #[serde(
        rename = "x5t#S256",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub x5t_s256: Option<String>,
    /// X.509 certificate chain, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x5c: Option<serde_json::Value>,
    /// Key ID hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// Critical extension names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crit: Option<Vec<String>>,
}

impl Header {
    /// Header carrying only `alg`.
    #[must_use]
    pub fn new(alg: impl Into<String>) -> Self {
        Self {
            alg: alg.into(),
            typ: None,
            cty: None,
            jku: None,
            jwk: None,
            x5u: None,
            x5t: None,
            x5t_s256: None,
            x5c: None,
            kid: None,
            crit: None,
        }
    }

    /// Set the key ID hint.
    #[must_use]
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }

    /// Decode the first compact-serialization segment.
    ///
    /// # Errors
    /// [`JwsError::Encoding`] if the segment is not URL-safe base64,
    /// [`JwsError::Format`] if the bytes are not a JSON object with a string `alg`.
    pub fn decode(segment: &str) -> JwsResult<Self> {
        let bytes = safe_decode(segment)?;
        Self::from_json(&bytes)
    }

    /// Parse already-decoded header bytes.
    ///
    /// # Errors
    /// [`JwsError::Format`] on invalid JSON or a missing / non-string `alg`.
    pub fn from_json(bytes: &[u8]) -> JwsResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| JwsError::Format(e.to_string()))
    }

    /// Match `alg` against the supported set.
    ///
    /// # Errors
    /// [`JwsError::UnknownAlgorithm`] naming the offending value.
    pub fn algorithm(&self) -> JwsResult<Algorithm> {
        self.alg.parse()
    }
}
