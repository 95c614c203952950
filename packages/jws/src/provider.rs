//! Key selection.
//!
//! A [`KeyProvider`] is the only place caller trust policy enters verification.
//! The verifier hands it the fully decoded header exactly once per call and
//! never retries.

use crate::{error::BoxError, header::Header, key::Key};
use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Resolves a decoded header to the key it must be verified with.
///
/// Implementations may block (a remote key-set fetch, for instance); that is
/// entirely their concern. The verifier imposes no locking on them.
pub trait KeyProvider {
    /// Key for this header, or the reason none could be chosen.
    ///
    /// # Errors
    /// Any error is surfaced as [`crate::JwsError::KeyLookup`].
    fn key_for(&self, header: &Header) -> Result<Key, BoxError>;
}

impl<P: KeyProvider + ?Sized> KeyProvider for &P {
    fn key_for(&self, header: &Header) -> Result<Key, BoxError> {
        (**self).key_for(header)
    }
}

impl<P: KeyProvider + ?Sized> KeyProvider for Box<P> {
    fn key_for(&self, header: &Header) -> Result<Key, BoxError> {
        (**self).key_for(header)
    }
}

impl<P: KeyProvider + ?Sized> KeyProvider for Arc<P> {
    fn key_for(&self, header: &Header) -> Result<Key, BoxError> {
        (**self).key_for(header)
    }
}

/// Provider backed by a closure over the header.
///
/// Wrapping keeps the blanket impls above coherent.
pub struct FnProvider<F>(pub F);

impl<F> KeyProvider for FnProvider<F>
where
    F: Fn(&Header) -> Result<Key, BoxError>,
{
    fn key_for(&self, header: &Header) -> Result<Key, BoxError> {
        (self.0)(header)
    }
}

/// Provider that returns the same key whatever the header says.
#[derive(Debug, Clone)]
pub struct SingleKey {
    key: Key,
}

impl SingleKey {
    /// Wrap a single fixed key.
    #[must_use]
    pub fn new(key: impl Into<Key>) -> Self {
        Self { key: key.into() }
    }

    /// The wrapped key.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }
}

impl From<Key> for SingleKey {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

impl KeyProvider for SingleKey {
    fn key_for(&self, _header: &Header) -> Result<Key, BoxError> {
        Ok(self.key.clone())
    }
}

/// Convert a single key into a provider.
#[must_use]
pub fn provider_from_key(key: impl Into<Key>) -> SingleKey {
    SingleKey::new(key)
}

/// Why a [`KeySet`] could not produce a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeySetError {
    /// The header carries no `kid`.
    #[error("JWS header has no kid")]
    MissingKeyId,
    /// No key is registered under the header's `kid`.
    #[error("No key registered for kid {0:?}")]
    UnknownKeyId(String),
}

/// Keys indexed by `kid`.
///
/// Reads are lock-free; updates swap in a new map atomically, so keys can be
/// rotated while verifications are in flight.
#[derive(Debug, Default)]
pub struct KeySet {
    keys: ArcSwap<HashMap<String, Key>>,
}

impl KeySet {
    /// Empty key set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` under `kid`, replacing any previous key with that id.
    pub fn insert(&self, kid: impl Into<String>, key: impl Into<Key>) {
        let kid = kid.into();
        let key = key.into();
        self.keys.rcu(|current| {
            let mut next = HashMap::clone(current);
            next.insert(kid.clone(), key.clone());
            next
        });
        tracing::debug!(kid = %kid, family = key.family(), "Key registered");
    }

    /// Remove the key registered under `kid`, returning whether one existed.
    pub fn remove(&self, kid: &str) -> bool {
        let previous = self.keys.rcu(|current| {
            let mut next = HashMap::clone(current);
            next.remove(kid);
            next
        });
        previous.contains_key(kid)
    }

    /// Replace every key at once.
    pub fn replace(&self, keys: HashMap<String, Key>) {
        self.keys.store(Arc::new(keys));
    }

    /// Number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.load().len()
    }

    /// Whether no keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.load().is_empty()
    }
}

impl FromIterator<(String, Key)> for KeySet {
    fn from_iter<I: IntoIterator<Item = (String, Key)>>(iter: I) -> Self {
        Self {
            keys: ArcSwap::from_pointee(iter.into_iter().collect()),
        }
    }
}

impl KeyProvider for KeySet {
    fn key_for(&self, header: &Header) -> Result<Key, BoxError> {
        let kid = header.kid.as_deref().ok_or(KeySetError::MissingKeyId)?;
        tracing::trace!(kid, "Looking up key");
        self.keys
            .load()
            .get(kid)
            .cloned()
            .ok_or_else(|| KeySetError::UnknownKeyId(kid.to_string()).into())
    }
}
