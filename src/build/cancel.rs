//! Cooperative cancellation for build workers

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that build workers poll between insertions
///
/// Clones share the same flag. Cancelling is permanent.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every worker holding this token to stop
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
