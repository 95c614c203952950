//! Compact serialization transport encoding.
//!
//! Segments are URL-safe base64. Producers disagree on padding, so decoding
//! accepts both forms, but padding that is present must be canonical.

use crate::error::{JwsError, JwsResult};
use base64::{
    Engine,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};

/// Decode one compact-serialization segment.
///
/// Unpadded input is decoded as-is; input containing `=` must carry exactly
/// the canonical amount of padding. The standard (`+`, `/`) alphabet is
/// rejected, as are non-zero trailing bits in the final character, which some
/// lenient decoders silently drop.
///
/// # Errors
/// Returns [`JwsError::Encoding`] on any non URL-safe character or malformed padding.
pub fn safe_decode(segment: &str) -> JwsResult<Vec<u8>> {
    let engine = if segment.contains('=') {
        &URL_SAFE
    } else {
        &URL_SAFE_NO_PAD
    };
    engine
        .decode(segment)
        .map_err(|e| JwsError::Encoding(e.to_string()))
}

/// The three encoded segments of a compact JWS, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactParts<'a> {
    /// Encoded protected header
    pub header: &'a str,
    /// Encoded payload
    pub payload: &'a str,
    /// Encoded signature
    pub signature: &'a str,
}

impl<'a> CompactParts<'a> {
    /// Split `header.payload.signature`, requiring exactly three non-empty segments.
    ///
    /// # Errors
    /// Returns [`JwsError::MalformedInput`] for any other shape.
    pub fn split(compact: &'a str) -> JwsResult<Self> {
        let mut segments = compact.split('.');
        match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(header), Some(payload), Some(signature), None) => {
                if header.is_empty() || payload.is_empty() || signature.is_empty() {
                    return Err(JwsError::malformed("empty segment"));
                }
                Ok(Self {
                    header,
                    payload,
                    signature,
                })
            }
            _ => Err(JwsError::malformed("expected exactly three segments")),
        }
    }

    /// Bytes covered by the signature: the encoded header, `.`, the encoded payload.
    #[must_use]
    pub fn signing_input(&self) -> Vec<u8> {
        let mut input = Vec::with_capacity(self.header.len() + 1 + self.payload.len());
        input.extend_from_slice(self.header.as_bytes());
        input.push(b'.');
        input.extend_from_slice(self.payload.as_bytes());
        input
    }
}
