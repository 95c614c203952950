//! RS256 verification with RSASSA-PKCS1-v1_5 and SHA-256

use crate::error::{JwsError, JwsResult};
use rsa::{Pkcs1v15Sign, RsaPublicKey};
use sha2::{Digest, Sha256};

/// Verify a PKCS#1 v1.5 signature over the SHA-256 digest of `signing_input`.
pub(crate) fn rs256_verify(
    public_key: &RsaPublicKey,
    signing_input: &[u8],
    signature: &[u8],
) -> JwsResult<()> {
    let digest = Sha256::digest(signing_input);
    public_key
        .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature)
        .map_err(|_| JwsError::SignatureInvalid)
}
