//! Clock port interface

use std::time::Duration;

use async_trait::async_trait;

/// Port for suspending between polling attempts.
///
/// The poll loop must not block the host runtime, so the wait is an
/// async suspension. Tests inject a clock that returns immediately.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Suspend the current task for the given duration.
    async fn sleep(&self, duration: Duration);
}
