//! Global trigger cooldown

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Rate-limits accepted triggers across all bound keys.
///
/// Exactly one trigger passes per cooldown interval; the check and the
/// update of the last-accepted time happen under one lock so two
/// near-simultaneous triggers cannot both pass. Rejected triggers are
/// dropped, never queued.
#[derive(Debug)]
pub struct CooldownGate {
    interval: Duration,
    last_accepted: Mutex<Option<Instant>>,
}

impl CooldownGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: Mutex::new(None),
        }
    }

    /// Accept or reject a trigger arriving now
    pub fn accept(&self) -> bool {
        self.accept_at(Instant::now())
    }

    /// Timestamp-injected variant of [`Self::accept`]
    pub fn accept_at(&self, now: Instant) -> bool {
        let mut last = self
            .last_accepted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match *last {
            Some(prev) if now.duration_since(prev) < self.interval => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
