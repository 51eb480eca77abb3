//! ShareResultHandler - share a result natively, falling back to the clipboard.

use std::sync::Arc;

use crate::domain::share::{SharePayload, ShareOutcome};
use crate::ports::SharePlatform;

#[derive(Debug, Clone)]
pub struct ShareResultCommand {
    pub payload: SharePayload,
}

pub struct ShareResultHandler {
    platform: Arc<dyn SharePlatform>,
    fallback_enabled: bool,
}

impl ShareResultHandler {
    pub fn new(platform: Arc<dyn SharePlatform>, fallback_enabled: bool) -> Self {
        Self {
            platform,
            fallback_enabled,
        }
    }

    /// Tries the native share surface when available, otherwise (or when it
    /// fails) copies the link. Never returns an error; a double failure is
    /// reported as [`ShareOutcome::Failed`].
    pub async fn handle(&self, cmd: ShareResultCommand) -> ShareOutcome {
        let share_error = if self.platform.supports_native_share() {
            match self.platform.share(&cmd.payload).await {
                Ok(()) => return ShareOutcome::Shared,
                Err(e) => {
                    tracing::debug!(error = %e, "Native share failed, trying clipboard");
                    Some(e)
                }
            }
        } else {
            None
        };

        if !self.fallback_enabled {
            return ShareOutcome::failed(
                share_error
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "Teilen wird nicht unterstützt".to_string()),
            );
        }

        match self
            .platform
            .copy_to_clipboard(&cmd.payload.clipboard_text())
            .await
        {
            Ok(()) => ShareOutcome::copied(),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard fallback failed");
                ShareOutcome::failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::share::InMemorySharePlatform;
    use crate::domain::share::COPY_CONFIRMATION;
    use crate::ports::ShareError;

    fn payload() -> SharePayload {
        SharePayload {
            title: "Sicherheits-Selbstcheck".to_string(),
            text: "Sicherheits-Selbstcheck: 72% (Mittel)".to_string(),
            url: "https://example.org/sicherheitscheck".to_string(),
        }
    }

    async fn share(platform: Arc<InMemorySharePlatform>, fallback: bool) -> ShareOutcome {
        ShareResultHandler::new(platform, fallback)
            .handle(ShareResultCommand { payload: payload() })
            .await
    }

    #[tokio::test]
    async fn native_share_used_when_supported() {
        let platform = Arc::new(InMemorySharePlatform::new().with_native_share());
        let outcome = share(platform.clone(), true).await;
        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(platform.shared(), vec![payload()]);
        assert_eq!(platform.clipboard(), None);
    }

    #[tokio::test]
    async fn clipboard_used_without_native_share() {
        let platform = Arc::new(InMemorySharePlatform::new());
        let outcome = share(platform.clone(), true).await;
        assert_eq!(
            outcome,
            ShareOutcome::Copied {
                confirmation: COPY_CONFIRMATION.to_string()
            }
        );
        assert_eq!(
            platform.clipboard().as_deref(),
            Some("Sicherheits-Selbstcheck: 72% (Mittel) https://example.org/sicherheitscheck")
        );
    }

    #[tokio::test]
    async fn clipboard_used_when_native_share_fails() {
        let platform = Arc::new(
            InMemorySharePlatform::new()
                .with_native_share()
                .failing_share(ShareError::Dismissed),
        );
        let outcome = share(platform, true).await;
        assert_eq!(outcome, ShareOutcome::copied());
    }

    #[tokio::test]
    async fn both_failing_reports_failure() {
        let platform = Arc::new(
            InMemorySharePlatform::new()
                .with_native_share()
                .failing_share(ShareError::Dismissed)
                .failing_clipboard(ShareError::ClipboardDenied("no permission".to_string())),
        );
        let outcome = share(platform, true).await;
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn disabled_fallback_skips_clipboard() {
        let platform = Arc::new(InMemorySharePlatform::new());
        let outcome = share(platform.clone(), false).await;
        assert!(matches!(outcome, ShareOutcome::Failed { .. }));
        assert_eq!(platform.clipboard(), None);
    }
}
