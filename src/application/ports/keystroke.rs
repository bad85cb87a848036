//! Copy-shortcut synthesis port interface

use async_trait::async_trait;
use thiserror::Error;

/// Keystroke errors
#[derive(Debug, Clone, Error)]
pub enum KeystrokeError {
    #[error("Failed to synthesize copy shortcut: {0}")]
    SendFailed(String),
}

/// Port for injecting the platform copy shortcut (Ctrl+C / Cmd+C) into
/// whatever application currently holds focus.
#[async_trait]
pub trait CopyKeystroke: Send + Sync {
    /// Send the copy shortcut to the focused application
    async fn send_copy(&self) -> Result<(), KeystrokeError>;
}
