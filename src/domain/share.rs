//! Sharing a tool result: native share sheet first, clipboard as fallback.

use serde::{Deserialize, Serialize};

/// Shown after the link was copied instead of shared.
pub const COPY_CONFIRMATION: &str = "Link wurde in die Zwischenablage kopiert!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Text placed on the clipboard when native sharing is unavailable.
    pub fn clipboard_text(&self) -> String {
        if self.text.is_empty() {
            self.url.clone()
        } else {
            format!("{} {}", self.text, self.url)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum ShareOutcome {
    Shared,
    Copied { confirmation: String },
    Failed { reason: String },
}

impl ShareOutcome {
    pub fn copied() -> Self {
        Self::Copied {
            confirmation: COPY_CONFIRMATION.to_string(),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}
