//! ES256 / ES512 verification with ECDSA on P-256 and P-521.
//!
//! JWS carries ECDSA signatures as the raw concatenation `R || S`, each scalar
//! left-padded to the curve's field size. The length is checked before any
//! scalar parsing or curve arithmetic happens.

use crate::{
    error::{JwsError, JwsResult},
    key::EcCurve,
};
use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p521::elliptic_curve::sec1::ToEncodedPoint;
use sha2::{Digest, Sha256, Sha512};

/// Split a raw signature into its `R` and `S` halves.
fn split_scalars(curve: EcCurve, signature: &[u8]) -> JwsResult<(&[u8], &[u8])> {
    let field_size = curve.field_size();
    if signature.len() != 2 * field_size {
        return Err(JwsError::SignatureInvalid);
    }
    Ok(signature.split_at(field_size))
}

/// ES256: ECDSA P-256 over the SHA-256 digest of `signing_input`
pub(crate) fn es256_verify(
    public_key: &p256::PublicKey,
    signing_input: &[u8],
    signature: &[u8],
) -> JwsResult<()> {
    let (r, s) = split_scalars(EcCurve::P256, signature)?;
    let signature = p256::ecdsa::Signature::from_scalars(
        p256::FieldBytes::clone_from_slice(r),
        p256::FieldBytes::clone_from_slice(s),
    )
    .map_err(|_| JwsError::SignatureInvalid)?;

    let digest = Sha256::digest(signing_input);
    p256::ecdsa::VerifyingKey::from(public_key)
        .verify_prehash(&digest, &signature)
        .map_err(|_| JwsError::SignatureInvalid)
}

/// ES512: ECDSA P-521 over the SHA-512 digest of `signing_input`
pub(crate) fn es512_verify(
    public_key: &p521::PublicKey,
    signing_input: &[u8],
    signature: &[u8],
) -> JwsResult<()> {
    let (r, s) = split_scalars(EcCurve::P521, signature)?;
    let signature = p521::ecdsa::Signature::from_scalars(
        p521::FieldBytes::clone_from_slice(r),
        p521::FieldBytes::clone_from_slice(s),
    )
    .map_err(|_| JwsError::SignatureInvalid)?;

    let point = public_key.to_encoded_point(false);
    let verifying_key = p521::ecdsa::VerifyingKey::from_sec1_bytes(point.as_bytes())
        .map_err(|_| JwsError::SignatureInvalid)?;

    let digest = Sha512::digest(signing_input);
    verifying_key
        .verify_prehash(&digest, &signature)
        .map_err(|_| JwsError::SignatureInvalid)
}
