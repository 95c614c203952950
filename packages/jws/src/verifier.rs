//! Compact JWS verification engine.
//!
//! Verification is a single sequential pass:
//!
//! 1. split the input into three non-empty segments
//! 2. decode the header
//! 3. ask the [`KeyProvider`] for a key, exactly once
//! 4. decode the signature
//! 5. dispatch on `alg` to the matching check
//! 6. decode and release the payload
//!
//! Every step fails fast. The payload segment is not even decoded until the
//! signature has been accepted.

use crate::{
    algorithms::Algorithm,
    config::VerifierConfig,
    crypto::{ecdsa_verification, hmac_sha256, rs256_verification},
    encoding::{CompactParts, safe_decode},
    error::{JwsError, JwsResult},
    header::Header,
    key::{EcPublicKey, Key, NoneKey},
    provider::KeyProvider,
};

/// A payload whose signature has been verified, with the header it was signed under.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedJws {
    /// Decoded protected header
    pub header: Header,
    /// Decoded payload bytes
    pub payload: Vec<u8>,
}

/// Stateless verifier carrying a [`VerifierConfig`] policy.
///
/// Holds no mutable state, so one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    config: VerifierConfig,
}

impl Verifier {
    /// Verifier with the given policy.
    #[must_use]
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    /// Policy in effect.
    #[must_use]
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verify `compact` and return its payload.
    ///
    /// # Errors
    /// Any [`JwsError`]; no payload is returned on any failure path.
    pub fn verify<P>(&self, compact: &str, provider: &P) -> JwsResult<Vec<u8>>
    where
        P: KeyProvider + ?Sized,
    {
        self.verify_with_header(compact, provider)
            .map(|verified| verified.payload)
    }

    /// Verify `compact` and return its payload together with the decoded header.
    ///
    /// # Errors
    /// Any [`JwsError`]; no payload is returned on any failure path.
    pub fn verify_with_header<P>(&self, compact: &str, provider: &P) -> JwsResult<VerifiedJws>
    where
        P: KeyProvider + ?Sized,
    {
        if let Some(limit) = self.config.max_token_length {
            if compact.len() > limit {
                return Err(JwsError::MalformedInput(format!(
                    "input is {} bytes, limit is {limit}",
                    compact.len()
                )));
            }
        }

        let parts = CompactParts::split(compact)?;
        let header = Header::decode(parts.header)?;
        tracing::debug!(alg = %header.alg, kid = ?header.kid, "Verifying compact JWS");

        let key = provider.key_for(&header).map_err(|e| {
            tracing::debug!(alg = %header.alg, error = %e, "Key provider failed");
            JwsError::KeyLookup(e)
        })?;

        let signature = safe_decode(parts.signature)?;

        if let Err(e) = self.check_signature(&header, &key, &parts.signing_input(), &signature) {
            tracing::debug!(alg = %header.alg, reason = e.kind(), "JWS rejected");
            return Err(e);
        }

        let payload = safe_decode(parts.payload)?;
        tracing::debug!(alg = %header.alg, payload_len = payload.len(), "JWS verified");

        Ok(VerifiedJws { header, payload })
    }

    fn check_signature(
        &self,
        header: &Header,
        key: &Key,
        signing_input: &[u8],
        signature: &[u8],
    ) -> JwsResult<()> {
        let alg = header.algorithm()?;
        if !self.config.allows(alg) {
            return Err(JwsError::AlgorithmNotAllowed(alg));
        }

        match alg {
            Algorithm::None => match key {
                Key::Unsigned(NoneKey) => Ok(()),
                // any real key here means the caller never authorized unsigned input
                _ => Err(JwsError::SignatureInvalid),
            },
            Algorithm::Hs256 => match key {
                Key::Symmetric(secret) => {
                    hmac_sha256::hs256_verify(secret, signing_input, signature)
                }
                other => Err(key_type_error(alg, "symmetric", other)),
            },
            Algorithm::Rs256 => match key {
                Key::Rsa(public_key) => {
                    rs256_verification::rs256_verify(public_key, signing_input, signature)
                }
                other => Err(key_type_error(alg, "RSA", other)),
            },
            Algorithm::Es256 => match key {
                Key::Ec(EcPublicKey::P256(public_key)) => {
                    ecdsa_verification::es256_verify(public_key, signing_input, signature)
                }
                other => Err(key_type_error(alg, "EC P-256", other)),
            },
            Algorithm::Es512 => match key {
                Key::Ec(EcPublicKey::P521(public_key)) => {
                    ecdsa_verification::es512_verify(public_key, signing_input, signature)
                }
                other => Err(key_type_error(alg, "EC P-521", other)),
            },
        }
    }
}

fn key_type_error(algorithm: Algorithm, expected: &'static str, found: &Key) -> JwsError {
    JwsError::KeyType {
        algorithm,
        expected,
        found: found.family(),
    }
}

/// Verify a compact JWS under the default policy and return its payload.
///
/// ```
/// use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
/// use cryypt_jws::{Key, provider_from_key, verify};
///
/// let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
/// let payload = URL_SAFE_NO_PAD.encode("hello");
/// let token = format!("{header}.{payload}.UYmO_lPAY5V0Wf4KZsfhiYs1SxqXPhxvjuYqellDV5A");
///
/// let provider = provider_from_key(Key::hmac(b"secret"));
/// assert_eq!(verify(&token, &provider).unwrap(), b"hello");
/// ```
///
/// # Errors
/// Any [`JwsError`]; no payload is returned on any failure path.
pub fn verify<P>(compact: &str, provider: &P) -> JwsResult<Vec<u8>>
where
    P: KeyProvider + ?Sized,
{
    Verifier::default().verify(compact, provider)
}
