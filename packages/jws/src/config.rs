//! Verifier policy configuration

use crate::algorithms::Algorithm;
use serde::{Deserialize, Serialize};

/// Policy applied on top of the signature checks.
///
/// Deserializable so it can live in an application's config file:
///
/// ```
/// use cryypt_jws::{Algorithm, VerifierConfig};
///
/// let config: VerifierConfig =
///     serde_json::from_str(r#"{"allowed_algorithms":["ES256","ES512"]}"#).unwrap();
/// assert!(config.allows(Algorithm::Es512));
/// assert!(!config.allows(Algorithm::Hs256));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Algorithms the verifier will dispatch to
    #[serde(default = "default_allowed_algorithms")]
    pub allowed_algorithms: Vec<Algorithm>,
    /// Longest compact serialization accepted, in bytes; unbounded when unset
    #[serde(default)]
    pub max_token_length: Option<usize>,
}

impl VerifierConfig {
    /// Whether `alg` may be dispatched to.
    #[must_use]
    pub fn allows(&self, alg: Algorithm) -> bool {
        self.allowed_algorithms.contains(&alg)
    }

    /// Restrict dispatch to `algorithms`.
    #[must_use]
    pub fn with_allowed_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.allowed_algorithms = algorithms.into_iter().collect();
        self
    }

    /// Refuse inputs longer than `max_token_length` bytes before decoding them.
    #[must_use]
    pub fn with_max_token_length(mut self, max_token_length: usize) -> Self {
        self.max_token_length = Some(max_token_length);
        self
    }
}

fn default_allowed_algorithms() -> Vec<Algorithm> {
    // none stays listed: it is still gated by the sentinel key
    Algorithm::ALL.to_vec()
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            allowed_algorithms: default_allowed_algorithms(),
            max_token_length: None,
        }
    }
}
