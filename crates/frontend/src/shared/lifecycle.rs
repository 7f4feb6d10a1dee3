use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Marks the end of a view's lifetime.
///
/// Async work started by a view holds a clone and checks it after every
/// suspension point; once cancelled, results are dropped without touching
/// view state.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let token = CancellationToken::new();
        let held_by_task = token.clone();
        assert!(!held_by_task.is_cancelled());
        token.cancel();
        assert!(held_by_task.is_cancelled());
    }
}
