//! HMAC-SHA256 verification for HS256

use crate::error::{JwsError, JwsResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 over `data` with `secret`.
pub(crate) fn hmac_sha256(secret: &[u8], data: &[u8]) -> JwsResult<Vec<u8>> {
    // HMAC accepts keys of any length, so this only fails if that ever changes
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| JwsError::SignatureInvalid)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// HS256 verification with constant-time comparison
pub(crate) fn hs256_verify(secret: &[u8], signing_input: &[u8], signature: &[u8]) -> JwsResult<()> {
    let expected = hmac_sha256(secret, signing_input)?;
    if bool::from(expected.as_slice().ct_eq(signature)) {
        Ok(())
    } else {
        Err(JwsError::SignatureInvalid)
    }
}
