//! Retrying clipboard capture of the current selection

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use super::ports::{Clipboard, ClipboardError, CopyKeystroke, KeystrokeError};

/// Terminal capture failure: no attempt produced non-empty text
#[derive(Debug, Clone, Error)]
#[error("No text selected")]
pub struct NoSelectionError;

/// Timing knobs for the capture protocol
#[derive(Debug, Clone)]
pub struct CaptureSettings {
    /// Bounded retry attempts
    pub attempts: u32,
    /// Pause after clearing the clipboard, before sending the copy shortcut
    pub settle: Duration,
    /// Wait after the copy shortcut on the first attempt
    pub base_wait: Duration,
    /// Extra wait added per subsequent attempt
    pub wait_increment: Duration,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            attempts: 3,
            settle: Duration::from_millis(50),
            base_wait: Duration::from_millis(150),
            wait_increment: Duration::from_millis(100),
        }
    }
}

/// Captures the currently selected text by intercepting the clipboard.
///
/// The clipboard is an OS-global resource; another capture may be running
/// concurrently and external applications can write at any time. No
/// exclusivity is assumed: a lost race simply means a failed or mixed
/// capture, rate-limited to rarity by the trigger cooldown.
pub struct SelectionCapture<C, K>
where
    C: Clipboard,
    K: CopyKeystroke,
{
    clipboard: C,
    keystroke: K,
    settings: CaptureSettings,
}

/// Per-attempt failure; the loop logs it and moves on
#[derive(Debug, Error)]
enum AttemptError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error(transparent)]
    Keystroke(#[from] KeystrokeError),
}

impl<C, K> SelectionCapture<C, K>
where
    C: Clipboard,
    K: CopyKeystroke,
{
    pub fn new(clipboard: C, keystroke: K, settings: CaptureSettings) -> Self {
        Self {
            clipboard,
            keystroke,
            settings,
        }
    }

    /// Run the capture protocol:
    /// snapshot, then per attempt clear -> copy shortcut -> wait -> read,
    /// with the wait growing each attempt to absorb slow clipboard
    /// propagation. If every attempt comes back empty the snapshot is
    /// restored and the capture reports no selection.
    pub async fn capture(&self) -> Result<String, NoSelectionError> {
        let snapshot = match self.clipboard.get_text().await {
            Ok(text) => Some(text),
            Err(err) => {
                debug!(%err, "could not snapshot clipboard before capture");
                None
            }
        };

        for attempt in 0..self.settings.attempts {
            match self.attempt(attempt).await {
                Ok(Some(text)) => return Ok(text),
                Ok(None) => {}
                Err(err) => debug!(attempt, %err, "capture attempt failed"),
            }
        }

        // Nothing captured: put the user's clipboard back
        if let Some(text) = snapshot {
            if let Err(err) = self.clipboard.set_text(&text).await {
                warn!(%err, "failed to restore clipboard after capture");
            }
        }

        Err(NoSelectionError)
    }

    async fn attempt(&self, attempt: u32) -> Result<Option<String>, AttemptError> {
        self.clipboard.clear().await?;
        tokio::time::sleep(self.settings.settle).await;

        self.keystroke.send_copy().await?;
        tokio::time::sleep(self.settings.base_wait + self.settings.wait_increment * attempt).await;

        let text = self.clipboard.get_text().await?;
        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }
}
