//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }

    fn open() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn get_text(&self) -> Result<String, ClipboardError> {
        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(|| {
            let mut clipboard = Self::open()?;
            match clipboard.get_text() {
                Ok(text) => Ok(text),
                // An empty clipboard is not an error for callers
                Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
                Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
            }
        })
        .await
        .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }

    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = Self::open()?;
            clipboard
                .set_text(&text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(format!("Task join error: {}", e)))?
    }

    async fn clear(&self) -> Result<(), ClipboardError> {
        tokio::task::spawn_blocking(|| {
            let mut clipboard = Self::open()?;
            clipboard
                .clear()
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(format!("Task join error: {}", e)))?
    }
}
