//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Port for the OS-global text clipboard.
///
/// The clipboard is shared with every other application: reads may race
/// with external writers and none of these operations are transactional.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current text contents. An empty clipboard reads as "".
    async fn get_text(&self) -> Result<String, ClipboardError>;

    /// Replace the contents with `text`
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Empty the clipboard
    async fn clear(&self) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn get_text(&self) -> Result<String, ClipboardError> {
        self.as_ref().get_text().await
    }

    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().set_text(text).await
    }

    async fn clear(&self) -> Result<(), ClipboardError> {
        self.as_ref().clear().await
    }
}
