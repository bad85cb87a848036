//! Worker pipeline integration tests
//!
//! Drives the capture-and-translate use case end to end with a fake
//! desktop (clipboard + copy shortcut) and a mocked Gemini backend.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tap_translate::application::ports::{
    Clipboard, ClipboardError, CopyKeystroke, KeystrokeError, NotificationError, NotificationIcon,
    Notifier,
};
use tap_translate::application::{
    CaptureSettings, ResultQueue, SelectionCapture, TranslateSelectionUseCase,
};
use tap_translate::domain::language::Language;
use tap_translate::infrastructure::GeminiTranslator;

/// Fake of the OS clipboard plus the focused application: the copy
/// shortcut "copies" the configured selection into the board.
struct FakeDesktop {
    board: Mutex<String>,
    selection: Option<String>,
    copies_sent: AtomicU32,
}

impl FakeDesktop {
    fn new(initial: &str, selection: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            board: Mutex::new(initial.to_string()),
            selection: selection.map(str::to_string),
            copies_sent: AtomicU32::new(0),
        })
    }

    fn board(&self) -> String {
        self.board.lock().unwrap().clone()
    }
}

/// Shareable handle over a `FakeDesktop`. A local newtype is required
/// because the orphan rule forbids implementing the crate's port traits
/// directly on `Arc<FakeDesktop>` from this external test crate.
#[derive(Clone)]
struct Handle(Arc<FakeDesktop>);

#[async_trait]
impl Clipboard for Handle {
    async fn get_text(&self) -> Result<String, ClipboardError> {
        Ok(self.0.board())
    }

    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.0.board.lock().unwrap() = text.to_string();
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClipboardError> {
        self.0.board.lock().unwrap().clear();
        Ok(())
    }
}

#[async_trait]
impl CopyKeystroke for Handle {
    async fn send_copy(&self) -> Result<(), KeystrokeError> {
        self.0.copies_sent.fetch_add(1, Ordering::SeqCst);
        if let Some(ref selection) = self.0.selection {
            *self.0.board.lock().unwrap() = selection.clone();
        }
        Ok(())
    }
}

struct SilentNotifier;

#[async_trait]
impl Notifier for SilentNotifier {
    async fn notify(
        &self,
        _title: &str,
        _message: &str,
        _icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        Ok(())
    }
}

type PipelineUseCase =
    TranslateSelectionUseCase<Handle, Handle, GeminiTranslator, SilentNotifier>;

fn use_case_for(
    desktop: &Arc<FakeDesktop>,
    server: &MockServer,
    queue: Arc<ResultQueue>,
) -> PipelineUseCase {
    let capture = SelectionCapture::new(
        Handle(Arc::clone(desktop)),
        Handle(Arc::clone(desktop)),
        CaptureSettings::default(),
    );
    let translator =
        GeminiTranslator::with_model("test-key", "test-model").with_base_url(server.uri());
    TranslateSelectionUseCase::new(capture, translator, SilentNotifier, queue, false)
}

fn language(code: &str) -> Language {
    code.parse().unwrap()
}

fn success_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }]
            }
        }]
    })
}

#[tokio::test]
async fn selection_flows_from_clipboard_to_queue() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("xin chào")))
        .mount(&server)
        .await;

    let desktop = FakeDesktop::new("old clipboard", Some("bonjour"));
    let queue = Arc::new(ResultQueue::new());
    let use_case = use_case_for(&desktop, &server, Arc::clone(&queue));

    use_case.execute(language("vi")).await;

    let results = queue.drain();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].original, "bonjour");
    assert_eq!(results[0].translated, "xin chào");
    assert_eq!(results[0].language.code(), "vi");
}

#[tokio::test]
async fn backend_failure_lands_as_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("kaput"))
        .mount(&server)
        .await;

    let desktop = FakeDesktop::new("", Some("bonjour"));
    let queue = Arc::new(ResultQueue::new());
    let use_case = use_case_for(&desktop, &server, Arc::clone(&queue));

    use_case.execute(language("en")).await;

    let results = queue.drain();
    assert_eq!(results.len(), 1);
    assert!(results[0].translated.starts_with("Error: "));
    assert_eq!(results[0].original, "bonjour");
}

#[tokio::test]
async fn empty_selection_restores_clipboard_and_produces_nothing() {
    let server = MockServer::start().await;
    // No mock mounted: the backend must never be called

    let desktop = FakeDesktop::new("precious", None);
    let queue = Arc::new(ResultQueue::new());
    let use_case = use_case_for(&desktop, &server, Arc::clone(&queue));

    use_case.execute(language("ja")).await;

    assert!(queue.is_empty());
    assert_eq!(desktop.board(), "precious");
    assert_eq!(desktop.copies_sent.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn queue_order_reflects_completion_not_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("first selection"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body("slow result"))
                .set_delay(Duration::from_millis(600)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("second selection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("fast result")))
        .mount(&server)
        .await;

    let queue = Arc::new(ResultQueue::new());

    let slow_desktop = FakeDesktop::new("", Some("first selection"));
    let slow = Arc::new(use_case_for(&slow_desktop, &server, Arc::clone(&queue)));

    let fast_desktop = FakeDesktop::new("", Some("second selection"));
    let fast = Arc::new(use_case_for(&fast_desktop, &server, Arc::clone(&queue)));

    // Dispatch the slow worker first; its result must still land last
    let slow_task = {
        let slow = Arc::clone(&slow);
        tokio::spawn(async move { slow.execute(language("vi")).await })
    };
    let fast_task = {
        let fast = Arc::clone(&fast);
        tokio::spawn(async move { fast.execute(language("ja")).await })
    };
    slow_task.await.unwrap();
    fast_task.await.unwrap();

    let results = queue.drain();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].translated, "fast result");
    assert_eq!(results[1].translated, "slow result");
}
