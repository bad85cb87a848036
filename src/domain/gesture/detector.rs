//! Repeated-keypress gesture detection

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::domain::language::Language;

/// A recognized gesture: the key that completed it and the target
/// language bound to that key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEvent<K> {
    pub key: K,
    pub language: Language,
}

/// Detects N releases of a bound key within a timeout window.
///
/// Generic over the key type so the input adapter can feed OS key codes
/// while tests drive it with plain values. One instance is owned by the
/// input-listening thread; all methods take `&mut self`.
///
/// The window check is sliding, not reset-on-timeout: a set of taps that
/// misses the timeout stays recorded, and the next release re-evaluates
/// the most recent N taps. Taps at 0.0s/0.5s/1.0s that miss a 0.6s
/// window can still complete a gesture with a fourth tap at 1.1s.
#[derive(Debug)]
pub struct GestureDetector<K> {
    bindings: HashMap<K, Language>,
    records: HashMap<K, VecDeque<Instant>>,
    tap_count: usize,
    tap_timeout: Duration,
}

impl<K: Copy + Eq + Hash> GestureDetector<K> {
    /// Create a detector for the given key-to-language bindings.
    /// `tap_count` is clamped to at least 1.
    pub fn new(bindings: HashMap<K, Language>, tap_count: usize, tap_timeout: Duration) -> Self {
        Self {
            bindings,
            records: HashMap::new(),
            tap_count: tap_count.max(1),
            tap_timeout,
        }
    }

    /// Process one key-release event. Returns a trigger when the release
    /// completes a gesture. Releases of unbound keys are a no-op.
    pub fn on_key_release(&mut self, key: K) -> Option<TriggerEvent<K>> {
        self.on_key_release_at(key, Instant::now())
    }

    /// Timestamp-injected variant of [`Self::on_key_release`]
    pub fn on_key_release_at(&mut self, key: K, at: Instant) -> Option<TriggerEvent<K>> {
        let language = *self.bindings.get(&key)?;

        let record = self.records.entry(key).or_default();
        record.push_back(at);
        // Bounded history: the record never holds more than tap_count entries
        while record.len() > self.tap_count {
            record.pop_front();
        }

        if record.len() == self.tap_count {
            if let (Some(&first), Some(&last)) = (record.front(), record.back()) {
                if last.duration_since(first) <= self.tap_timeout {
                    record.clear();
                    return Some(TriggerEvent { key, language });
                }
            }
            // Timeout miss: keep the record, older taps age out by eviction
        }

        None
    }

    /// Keys the detector reacts to
    pub fn bound_keys(&self) -> impl Iterator<Item = &K> {
        self.bindings.keys()
    }
}
