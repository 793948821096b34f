//! System clipboard, used to copy a contact link's URL.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to copy to clipboard: {0}")]
    Write(#[source] arboard::Error),
}

/// Lazily opened clipboard; the first copy connects to the system one.
#[derive(Default)]
pub struct LinkClipboard {
    clipboard: Option<Clipboard>,
}

impl LinkClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(&mut self, url: &str) -> Result<(), ClipboardError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().map_err(ClipboardError::Unavailable)?);
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard
                .set_text(url.to_string())
                .map_err(ClipboardError::Write)?;
            tracing::debug!(url, "Copied link to clipboard");
        }
        Ok(())
    }
}
