//! Ordered record of collaborator calls.

use std::sync::Arc;

use parking_lot::Mutex;

/// Cloneable, thread-safe list of call labels in the order they happened.
///
/// Fakes push a label when invoked; tests compare the final sequence.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, label: &'static str) {
        tracing::trace!(call = label, "recorded collaborator call");
        self.entries.lock().push(label);
    }

    /// Snapshot of every recorded call.
    pub fn calls(&self) -> Vec<&'static str> {
        self.entries.lock().clone()
    }

    pub fn count(&self, label: &str) -> usize {
        self.entries.lock().iter().filter(|c| **c == label).count()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.count(label) > 0
    }

    /// Position of the first call with `label`, if any.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.lock().iter().position(|c| *c == label)
    }
}
