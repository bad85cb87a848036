//! Capture-and-translate worker use case

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::language::Language;
use crate::domain::translation::{TranslationPrompt, TranslationResult};

use super::capture::SelectionCapture;
use super::ports::{Clipboard, CopyKeystroke, NotificationIcon, Notifier, Translator};
use super::queue::ResultQueue;

/// User-facing report when the capture protocol comes up empty
pub const NO_SELECTION_MESSAGE: &str = "No text selected. Please select text and try again.";

/// One instance is shared by all workers; `execute` runs once per
/// accepted trigger, concurrently with other in-flight executions.
///
/// Failures never leave this boundary as errors: a backend failure is
/// normalized into a result payload, and a failed capture produces no
/// result at all (reported through the notifier and the log instead).
pub struct TranslateSelectionUseCase<C, K, T, N>
where
    C: Clipboard,
    K: CopyKeystroke,
    T: Translator,
    N: Notifier,
{
    capture: SelectionCapture<C, K>,
    translator: T,
    notifier: N,
    queue: Arc<ResultQueue>,
    enable_notify: bool,
}

impl<C, K, T, N> TranslateSelectionUseCase<C, K, T, N>
where
    C: Clipboard,
    K: CopyKeystroke,
    T: Translator,
    N: Notifier,
{
    pub fn new(
        capture: SelectionCapture<C, K>,
        translator: T,
        notifier: N,
        queue: Arc<ResultQueue>,
        enable_notify: bool,
    ) -> Self {
        Self {
            capture,
            translator,
            notifier,
            queue,
            enable_notify,
        }
    }

    /// The result queue this use case feeds
    pub fn queue(&self) -> Arc<ResultQueue> {
        Arc::clone(&self.queue)
    }

    /// Run one capture-and-translate invocation for `language`
    pub async fn execute(&self, language: Language) {
        let text = match self.capture.capture().await {
            Ok(text) => text,
            Err(_) => {
                info!(%language, "capture yielded no selection");
                if self.enable_notify {
                    let _ = self
                        .notifier
                        .notify("TapTranslate", NO_SELECTION_MESSAGE, NotificationIcon::Warning)
                        .await;
                }
                return;
            }
        };

        let prompt = TranslationPrompt::build(language);
        let result = match self.translator.translate(&text, &prompt).await {
            Ok(translated) => TranslationResult::new(text, translated, language),
            Err(err) => {
                warn!(%language, %err, "translation backend failed");
                TranslationResult::failure(text, err.to_string(), language)
            }
        };

        self.queue.push(result);
    }
}
