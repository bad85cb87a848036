//! Hand-off queue between worker tasks and the consumption loop

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::domain::translation::TranslationResult;

/// Thread-safe, unbounded FIFO bridge.
///
/// Producers are the capture-and-translate workers, any number of them,
/// from any thread. The single consumer drains everything available in
/// one call per poll tick. Order is completion order, not trigger order:
/// a slow worker's result lands behind results of workers that finished
/// first.
#[derive(Debug, Default)]
pub struct ResultQueue {
    items: Mutex<VecDeque<TranslationResult>>,
}

impl ResultQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue one result, transferring ownership to the queue
    pub fn push(&self, result: TranslationResult) {
        self.lock().push_back(result);
    }

    /// Take every currently available item, oldest first
    pub fn drain(&self) -> Vec<TranslationResult> {
        self.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<TranslationResult>> {
        // The lock is held only for queue bookkeeping; recover from poison
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
