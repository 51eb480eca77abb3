//! Cosmetic delay adapters.

use async_trait::async_trait;
use std::time::Duration;

use crate::ports::CosmeticDelay;

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct TokioDelay {
    duration: Duration,
}

impl TokioDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl CosmeticDelay for TokioDelay {
    async fn pause(&self) {
        if !self.duration.is_zero() {
            tokio::time::sleep(self.duration).await;
        }
    }

    fn duration(&self) -> Duration {
        self.duration
    }
}

/// Returns immediately. Used in tests and when latency simulation is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl CosmeticDelay for NoDelay {
    async fn pause(&self) {}

    fn duration(&self) -> Duration {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_delay_sleeps_for_configured_duration() {
        let delay = TokioDelay::from_millis(800);
        let start = tokio::time::Instant::now();
        delay.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test]
    async fn no_delay_returns_immediately() {
        let delay = NoDelay;
        delay.pause().await;
        assert_eq!(delay.duration(), Duration::ZERO);
    }
}
