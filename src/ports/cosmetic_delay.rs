//! Cosmetic Delay Port - the "generating your results" pause.
//!
//! The pause is presentation polish. It never influences a result and
//! implementations may return immediately.

use async_trait::async_trait;
use std::time::Duration;

/// Port for the optional perceived-latency pause before showing results.
#[async_trait]
pub trait CosmeticDelay: Send + Sync {
    /// Waits for the configured duration. Never fails.
    async fn pause(&self);

    /// The configured duration, zero when disabled.
    fn duration(&self) -> Duration;
}
