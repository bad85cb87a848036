//! Cross-platform copy-shortcut adapter using enigo
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use crate::application::ports::{CopyKeystroke, KeystrokeError};

/// Synthesizes the platform copy chord with enigo
pub struct EnigoCopyKeystroke;

impl EnigoCopyKeystroke {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnigoCopyKeystroke {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CopyKeystroke for EnigoCopyKeystroke {
    async fn send_copy(&self) -> Result<(), KeystrokeError> {
        // enigo operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            use enigo::{Direction, Enigo, Key, Keyboard, Settings};

            let mut enigo = Enigo::new(&Settings::default()).map_err(|e| {
                KeystrokeError::SendFailed(format!("Failed to create enigo: {}", e))
            })?;

            // Cmd+C on macOS, Ctrl+C everywhere else
            let modifier = if cfg!(target_os = "macos") {
                Key::Meta
            } else {
                Key::Control
            };

            enigo
                .key(modifier, Direction::Press)
                .map_err(|e| KeystrokeError::SendFailed(e.to_string()))?;
            let chord = enigo
                .key(Key::Unicode('c'), Direction::Click)
                .map_err(|e| KeystrokeError::SendFailed(e.to_string()));
            // Always release the modifier, even if the 'c' press failed
            enigo
                .key(modifier, Direction::Release)
                .map_err(|e| KeystrokeError::SendFailed(e.to_string()))?;

            chord
        })
        .await
        .map_err(|e| KeystrokeError::SendFailed(format!("Task join error: {}", e)))?
    }
}
