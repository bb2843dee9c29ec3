//! Request-sequence tokens for discarding superseded responses.
//!
//! Every fetch started for a selection key gets a token. When the response
//! arrives it is applied only if no newer token was issued for the same key
//! in the meantime.

use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken<K> {
    key: K,
    sequence: u64,
}

impl<K> RequestToken<K> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug)]
pub struct RequestSequencer<K> {
    next: u64,
    latest: HashMap<K, u64>,
}

impl<K> Default for RequestSequencer<K> {
    fn default() -> Self {
        Self {
            next: 0,
            latest: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone + std::fmt::Debug> RequestSequencer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token that supersedes every earlier token for `key`.
    pub fn issue(&mut self, key: K) -> RequestToken<K> {
        self.next += 1;
        self.latest.insert(key.clone(), self.next);
        RequestToken {
            key,
            sequence: self.next,
        }
    }

    pub fn is_current(&self, token: &RequestToken<K>) -> bool {
        self.latest.get(&token.key) == Some(&token.sequence)
    }

    /// Passes `value` through when `token` is still current, drops it otherwise.
    pub fn accept<T>(&self, token: &RequestToken<K>, value: T) -> Option<T> {
        if self.is_current(token) {
            Some(value)
        } else {
            debug!(
                "Discarding superseded response for {:?} (sequence {})",
                token.key, token.sequence
            );
            None
        }
    }
}
