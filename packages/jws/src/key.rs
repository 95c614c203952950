//! Verification key material.
//!
//! Keys are tagged by family so a mismatch between the declared algorithm and
//! the key is an exhaustive match failure, never a coercion. Private keys are
//! accepted at construction and reduced to their public half immediately.

use crate::error::{JwsError, JwsResult};
use rsa::{
    RsaPrivateKey, RsaPublicKey,
    pkcs8::{DecodePrivateKey, DecodePublicKey},
};
use std::fmt;
use zeroize::Zeroizing;

/// Sentinel that explicitly authorizes unsigned (`alg: none`) tokens.
///
/// It carries no data and cannot be produced from bytes, so no symmetric or
/// asymmetric key can ever be mistaken for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoneKey;

/// The `none` authorization sentinel as a [`Key`].
pub const NONE_KEY: Key = Key::Unsigned(NoneKey);

/// Elliptic curves with a supported ECDSA algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    /// NIST P-256, used by ES256
    P256,
    /// NIST P-521, used by ES512
    P521,
}

impl EcCurve {
    /// Size in bytes of one scalar of a raw `R || S` signature.
    #[must_use]
    pub fn field_size(self) -> usize {
        match self {
            EcCurve::P256 => 32,
            EcCurve::P521 => 66,
        }
    }
}

impl fmt::Display for EcCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EcCurve::P256 => "P-256",
            EcCurve::P521 => "P-521",
        })
    }
}

/// Public elliptic-curve key, tagged by curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcPublicKey {
    /// P-256 point
    P256(p256::PublicKey),
    /// P-521 point
    P521(p521::PublicKey),
}

impl EcPublicKey {
    /// Curve this key lives on.
    #[must_use]
    pub fn curve(&self) -> EcCurve {
        match self {
            EcPublicKey::P256(_) => EcCurve::P256,
            EcPublicKey::P521(_) => EcCurve::P521,
        }
    }
}

/// Key material returned by a [`crate::KeyProvider`].
#[derive(Clone)]
pub enum Key {
    /// Authorizes `alg: none`; see [`NONE_KEY`].
    Unsigned(NoneKey),
    /// Shared HMAC secret
    Symmetric(Zeroizing<Vec<u8>>),
    /// RSA public key
    Rsa(RsaPublicKey),
    /// Elliptic-curve public key
    Ec(EcPublicKey),
}

impl Key {
    /// Shared secret for HS256.
    #[must_use]
    pub fn hmac(secret: impl AsRef<[u8]>) -> Self {
        Key::Symmetric(Zeroizing::new(secret.as_ref().to_vec()))
    }

    /// RSA public key from SubjectPublicKeyInfo DER.
    ///
    /// # Errors
    /// [`JwsError::InvalidKey`] if the DER does not hold an RSA public key.
    pub fn rsa_public_der(der: &[u8]) -> JwsResult<Self> {
        RsaPublicKey::from_public_key_der(der)
            .map(Key::Rsa)
            .map_err(|e| JwsError::InvalidKey(format!("Invalid RSA public key: {e}")))
    }

    /// RSA public key from a `PUBLIC KEY` PEM document.
    ///
    /// # Errors
    /// [`JwsError::InvalidKey`] if the PEM does not hold an RSA public key.
    pub fn rsa_public_pem(pem: &str) -> JwsResult<Self> {
        RsaPublicKey::from_public_key_pem(pem)
            .map(Key::Rsa)
            .map_err(|e| JwsError::InvalidKey(format!("Invalid RSA public key PEM: {e}")))
    }

    /// Public half of an RSA private key in PKCS#8 DER.
    ///
    /// # Errors
    /// [`JwsError::InvalidKey`] if the DER does not hold an RSA private key.
    pub fn rsa_private_der(der: &[u8]) -> JwsResult<Self> {
        RsaPrivateKey::from_pkcs8_der(der)
            .map(Key::from)
            .map_err(|e| JwsError::InvalidKey(format!("Invalid RSA private key: {e}")))
    }

    /// Public half of an RSA private key in a `PRIVATE KEY` PEM document.
    ///
    /// # Errors
    /// [`JwsError::InvalidKey`] if the PEM does not hold an RSA private key.
    pub fn rsa_private_pem(pem: &str) -> JwsResult<Self> {
        RsaPrivateKey::from_pkcs8_pem(pem)
            .map(Key::from)
            .map_err(|e| JwsError::InvalidKey(format!("Invalid RSA private key PEM: {e}")))
    }

    /// EC public key from a SEC1 encoded point (compressed or uncompressed).
    ///
    /// # Errors
    /// [`JwsError::InvalidKey`] if the bytes are not a point on `curve`.
    pub fn ec_public_sec1(curve: EcCurve, bytes: &[u8]) -> JwsResult<Self> {
        let key = match curve {
            EcCurve::P256 => p256::PublicKey::from_sec1_bytes(bytes).map(EcPublicKey::P256),
            EcCurve::P521 => p521::PublicKey::from_sec1_bytes(bytes).map(EcPublicKey::P521),
        };
        key.map(Key::Ec)
            .map_err(|_| JwsError::InvalidKey(format!("Invalid SEC1 point for {curve}")))
    }

    /// EC public key from SubjectPublicKeyInfo DER.
    ///
    /// # Errors
    /// [`JwsError::InvalidKey`] if the DER does not hold a `curve` public key.
    pub fn ec_public_der(curve: EcCurve, der: &[u8]) -> JwsResult<Self> {
        let key = match curve {
            EcCurve::P256 => p256::PublicKey::from_public_key_der(der)
                .map(EcPublicKey::P256)
                .map_err(|e| e.to_string()),
            EcCurve::P521 => p521::PublicKey::from_public_key_der(der)
                .map(EcPublicKey::P521)
                .map_err(|e| e.to_string()),
        };
        key.map(Key::Ec)
            .map_err(|e| JwsError::InvalidKey(format!("Invalid {curve} public key: {e}")))
    }

    /// EC public key from a `PUBLIC KEY` PEM document.
    ///
    /// # Errors
    /// [`JwsError::InvalidKey`] if the PEM does not hold a `curve` public key.
    pub fn ec_public_pem(curve: EcCurve, pem: &str) -> JwsResult<Self> {
        let key = match curve {
            EcCurve::P256 => p256::PublicKey::from_public_key_pem(pem)
                .map(EcPublicKey::P256)
                .map_err(|e| e.to_string()),
            EcCurve::P521 => p521::PublicKey::from_public_key_pem(pem)
                .map(EcPublicKey::P521)
                .map_err(|e| e.to_string()),
        };
        key.map(Key::Ec)
            .map_err(|e| JwsError::InvalidKey(format!("Invalid {curve} public key PEM: {e}")))
    }

    /// Public half of a raw big-endian private scalar
    /// (32 bytes for P-256, 66 bytes for P-521).
    ///
    /// # Errors
    /// [`JwsError::InvalidKey`] if the scalar has the wrong size or is out of range.
    pub fn ec_private_scalar(curve: EcCurve, scalar: &[u8]) -> JwsResult<Self> {
        if scalar.len() != curve.field_size() {
            return Err(JwsError::InvalidKey(format!(
                "{curve} private scalar must be {} bytes, got {}",
                curve.field_size(),
                scalar.len()
            )));
        }
        let key = match curve {
            EcCurve::P256 => p256::SecretKey::from_slice(scalar).map(Key::from),
            EcCurve::P521 => p521::SecretKey::from_slice(scalar).map(Key::from),
        };
        key.map_err(|_| JwsError::InvalidKey(format!("Invalid {curve} private scalar")))
    }

    /// Family name used in [`JwsError::KeyType`].
    #[must_use]
    pub fn family(&self) -> &'static str {
        match self {
            Key::Unsigned(_) => "none",
            Key::Symmetric(_) => "symmetric",
            Key::Rsa(_) => "RSA",
            Key::Ec(EcPublicKey::P256(_)) => "EC P-256",
            Key::Ec(EcPublicKey::P521(_)) => "EC P-521",
        }
    }

    /// Whether this is the `none` authorization sentinel.
    #[must_use]
    pub fn is_none_sentinel(&self) -> bool {
        matches!(self, Key::Unsigned(NoneKey))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Unsigned(sentinel) => f.debug_tuple("Unsigned").field(sentinel).finish(),
            Key::Symmetric(secret) => f
                .debug_struct("Symmetric")
                .field("len", &secret.len())
                .finish_non_exhaustive(),
            Key::Rsa(key) => f.debug_tuple("Rsa").field(key).finish(),
            Key::Ec(key) => f.debug_tuple("Ec").field(key).finish(),
        }
    }
}

impl From<NoneKey> for Key {
    fn from(sentinel: NoneKey) -> Self {
        Key::Unsigned(sentinel)
    }
}

impl From<RsaPublicKey> for Key {
    fn from(key: RsaPublicKey) -> Self {
        Key::Rsa(key)
    }
}

impl From<RsaPrivateKey> for Key {
    fn from(key: RsaPrivateKey) -> Self {
        Key::from(&key)
    }
}

impl From<&RsaPrivateKey> for Key {
    fn from(key: &RsaPrivateKey) -> Self {
        Key::Rsa(key.to_public_key())
    }
}

impl From<p256::PublicKey> for Key {
    fn from(key: p256::PublicKey) -> Self {
        Key::Ec(EcPublicKey::P256(key))
    }
}

impl From<p256::SecretKey> for Key {
    fn from(key: p256::SecretKey) -> Self {
        Key::Ec(EcPublicKey::P256(key.public_key()))
    }
}

impl From<p521::PublicKey> for Key {
    fn from(key: p521::PublicKey) -> Self {
        Key::Ec(EcPublicKey::P521(key))
    }
}

impl From<p521::SecretKey> for Key {
    fn from(key: p521::SecretKey) -> Self {
        Key::Ec(EcPublicKey::P521(key.public_key()))
    }
}
