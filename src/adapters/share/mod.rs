//! In-memory share platform.
//!
//! Records what was shared or copied. Native share support and failures
//! are configurable so every branch of the share fallback can be driven.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::share::SharePayload;
use crate::ports::{ShareError, SharePlatform};

#[derive(Debug, Default)]
pub struct InMemorySharePlatform {
    native_share: bool,
    share_error: Option<ShareError>,
    clipboard_error: Option<ShareError>,
    shared: Mutex<Vec<SharePayload>>,
    clipboard: Mutex<Option<String>>,
}

impl InMemorySharePlatform {
    /// A platform without native share, with a working clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_native_share(mut self) -> Self {
        self.native_share = true;
        self
    }

    pub fn failing_share(mut self, error: ShareError) -> Self {
        self.share_error = Some(error);
        self
    }

    pub fn failing_clipboard(mut self, error: ShareError) -> Self {
        self.clipboard_error = Some(error);
        self
    }

    pub fn shared(&self) -> Vec<SharePayload> {
        self.shared
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl SharePlatform for InMemorySharePlatform {
    fn supports_native_share(&self) -> bool {
        self.native_share
    }

    async fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        if let Some(error) = &self.share_error {
            return Err(error.clone());
        }
        let mut shared = self
            .shared
            .lock()
            .map_err(|e| ShareError::Platform(e.to_string()))?;
        shared.push(payload.clone());
        Ok(())
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
        if let Some(error) = &self.clipboard_error {
            return Err(error.clone());
        }
        let mut clipboard = self
            .clipboard
            .lock()
            .map_err(|e| ShareError::Platform(e.to_string()))?;
        *clipboard = Some(text.to_string());
        Ok(())
    }
}
