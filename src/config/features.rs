//! Feature flags configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for the cosmetic results delay.
const MAX_SIMULATED_LATENCY_MS: u64 = 5000;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Cosmetic pause before results are returned; 0 disables it
    #[serde(default)]
    pub simulated_latency_ms: u64,

    /// Copy the link to the clipboard when native sharing is unavailable
    #[serde(default = "default_share_fallback")]
    pub share_fallback_enabled: bool,
}

impl FeatureFlags {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            return Err(ValidationError::LatencyTooLarge(self.simulated_latency_ms));
        }
        Ok(())
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 0,
            share_fallback_enabled: default_share_fallback(),
        }
    }
}

fn default_share_fallback() -> bool {
    true
}
