//! Tokio clock adapter

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::Clock;

/// Clock backed by the tokio timer. Suspends the task without
/// blocking the runtime, so concurrent jobs stay responsive.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
