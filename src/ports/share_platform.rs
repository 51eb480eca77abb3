//! Share Platform Port - native share sheet and clipboard of the host.

use async_trait::async_trait;

use crate::domain::share::SharePayload;

/// Errors reported by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    #[error("Share dialog was dismissed")]
    Dismissed,

    #[error("Clipboard access denied: {0}")]
    ClipboardDenied(String),

    #[error("Platform error: {0}")]
    Platform(String),
}

/// Port for the host's share and clipboard primitives.
#[async_trait]
pub trait SharePlatform: Send + Sync {
    /// Whether a native share surface exists.
    fn supports_native_share(&self) -> bool;

    /// Opens the native share surface.
    async fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;

    /// Writes `text` to the clipboard.
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;
}
