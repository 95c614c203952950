//! JWS verification error types

use crate::algorithms::Algorithm;
use thiserror::Error;

/// Boxed error returned by key providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// JWS operation result type
pub type JwsResult<T> = Result<T, JwsError>;

/// Every way a verification can fail.
///
/// All variants are terminal: the verifier never retries and never releases a
/// payload once any of them has been produced.
#[derive(Debug, Error)]
pub enum JwsError {
    /// The input is not a three-segment compact serialization.
    #[error("Malformed JWS: {0}")]
    MalformedInput(String),

    /// A segment is not valid URL-safe base64.
    #[error("Invalid JWS encoding: {0}")]
    Encoding(String),

    /// The header decoded to bytes but is not a valid JWS header object.
    #[error("Invalid JWS header: {0}")]
    Format(String),

    /// The key provider could not produce a key for this header.
    #[error("Failed to acquire verification key: {0}")]
    KeyLookup(#[source] BoxError),

    /// The key material does not belong to the family the algorithm requires.
    #[error("{algorithm} requires {expected} key material, got {found}")]
    KeyType {
        /// Declared algorithm
        algorithm: Algorithm,
        /// Key family the algorithm needs
        expected: &'static str,
        /// Key family the provider returned
        found: &'static str,
    },

    /// The cryptographic check failed.
    ///
    /// Deliberately carries no detail: a bad signature, a wrong-length
    /// signature and a refused unsigned token all look the same.
    #[error("Signature verification failed")]
    SignatureInvalid,

    /// `alg` names an algorithm outside the supported set.
    #[error("Unknown signature algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The algorithm is supported but excluded by the verifier configuration.
    #[error("Algorithm {0} is not allowed by verifier policy")]
    AlgorithmNotAllowed(Algorithm),

    /// Key material could not be parsed while building a [`crate::Key`].
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl JwsError {
    /// Create a malformed input error
    #[inline]
    #[must_use]
    pub fn malformed(msg: &str) -> Self {
        JwsError::MalformedInput(msg.to_string())
    }

    /// Create an encoding error
    #[inline]
    #[must_use]
    pub fn encoding(msg: &str) -> Self {
        JwsError::Encoding(msg.to_string())
    }

    /// Create a header format error
    #[inline]
    #[must_use]
    pub fn format(msg: &str) -> Self {
        JwsError::Format(msg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwsError::InvalidKey(msg.to_string())
    }

    /// Wrap a provider failure
    #[inline]
    #[must_use]
    pub fn key_lookup(source: impl Into<BoxError>) -> Self {
        JwsError::KeyLookup(source.into())
    }

    /// Short, stable name of the error class, safe to log.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            JwsError::MalformedInput(_) => "malformed_input",
            JwsError::Encoding(_) => "encoding",
            JwsError::Format(_) => "format",
            JwsError::KeyLookup(_) => "key_lookup",
            JwsError::KeyType { .. } => "key_type",
            JwsError::SignatureInvalid => "signature_invalid",
            JwsError::UnknownAlgorithm(_) => "unknown_algorithm",
            JwsError::AlgorithmNotAllowed(_) => "algorithm_not_allowed",
            JwsError::InvalidKey(_) => "invalid_key",
        }
    }
}
