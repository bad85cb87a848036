//! Utility runner: wires the gesture pipeline together

use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::application::ports::{ConfigStore, NotificationIcon, Notifier};
use crate::application::{CaptureSettings, ResultQueue, SelectionCapture, TranslateSelectionUseCase};
use crate::domain::config::AppConfig;
use crate::domain::gesture::{CooldownGate, GestureDetector};
use crate::infrastructure::input::{resolve_bindings, spawn_key_release_listener};
use crate::infrastructure::{
    ArboardClipboard, EnigoCopyKeystroke, GeminiTranslator, NotifyRustNotifier, XdgConfigStore,
};

use super::args::RunOptions;
use super::instance::{InstanceError, SingleInstanceGuard};
use super::presenter::Presenter;
use super::signals::{AppSignal, AppSignalHandler};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// How often the consumption loop drains the result queue
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the utility until a shutdown signal arrives
pub async fn run_app(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();
    let notifier = NotifyRustNotifier::new();

    // Claim the single-instance lock before any other initialization
    let _instance_guard = match SingleInstanceGuard::acquire() {
        Ok(guard) => guard,
        Err(err @ InstanceError::AlreadyRunning) => {
            presenter.error(&err.to_string());
            let _ = notifier
                .notify("TapTranslate", &err.to_string(), NotificationIcon::Warning)
                .await;
            return ExitCode::from(EXIT_ERROR);
        }
        Err(err) => {
            presenter.error(&err.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Resolve gesture bindings; a typo in one entry must not kill the rest
    let bindings = resolve_bindings(&options.bindings);
    if bindings.is_empty() {
        presenter.error("No usable gesture bindings configured");
        return ExitCode::from(EXIT_ERROR);
    }
    let binding_count = bindings.len();

    // The detector and gate live on the input-listening thread; accepted
    // triggers cross into the runtime through this channel
    let mut detector = GestureDetector::new(bindings, options.tap_count, options.tap_timeout);
    let gate = CooldownGate::new(options.cooldown);
    let (trigger_tx, mut trigger_rx) = mpsc::unbounded_channel();

    let listener = spawn_key_release_listener(move |key| {
        if let Some(trigger) = detector.on_key_release(key) {
            if gate.accept() {
                let _ = trigger_tx.send(trigger);
            } else {
                debug!(language = %trigger.language, "trigger dropped by cooldown");
            }
        }
    });
    if let Err(err) = listener {
        presenter.error(&format!("Failed to start input listener: {}", err));
        return ExitCode::from(EXIT_ERROR);
    }

    // One use case instance shared by all workers
    let translator = match options.model.as_deref() {
        Some(model) => GeminiTranslator::with_model(options.api_key.clone(), model),
        None => GeminiTranslator::new(options.api_key.clone()),
    };
    let capture = SelectionCapture::new(
        ArboardClipboard::new(),
        EnigoCopyKeystroke::new(),
        CaptureSettings::default(),
    );
    let use_case = Arc::new(TranslateSelectionUseCase::new(
        capture,
        translator,
        NotifyRustNotifier::new(),
        Arc::new(ResultQueue::new()),
        options.notify,
    ));
    let queue = use_case.queue();

    let (mut signals, _signal_tx) = match AppSignalHandler::new() {
        Ok(pair) => pair,
        Err(err) => {
            presenter.error(&format!("Failed to setup signal handler: {}", err));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.app_status("Listening for gestures...");
    presenter.info(&format!(
        "{} bindings | {} taps within {}ms | cooldown {}ms | Ctrl+C: exit",
        binding_count,
        options.tap_count,
        options.tap_timeout.as_millis(),
        options.cooldown.as_millis(),
    ));
    info!(
        bindings = binding_count,
        tap_count = options.tap_count,
        "utility started"
    );

    let mut poll = tokio::time::interval(POLL_INTERVAL);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut exit = EXIT_SUCCESS;

    loop {
        tokio::select! {
            signal = signals.recv() => {
                // None means the signal channel itself died; treat both
                // as a shutdown request
                if let Some(AppSignal::Shutdown) = signal {
                    info!("shutdown requested");
                }
                presenter.app_status("Shutting down...");
                break;
            }
            trigger = trigger_rx.recv() => match trigger {
                Some(trigger) => {
                    info!(language = %trigger.language, "trigger accepted");
                    let use_case = Arc::clone(&use_case);
                    tokio::spawn(async move {
                        use_case.execute(trigger.language).await;
                    });
                }
                None => {
                    presenter.error("Input listener stopped unexpectedly");
                    exit = EXIT_ERROR;
                    break;
                }
            },
            _ = poll.tick() => {
                for result in queue.drain() {
                    presenter.translation(&result);
                    if options.notify {
                        let title = format!(
                            "{} ({})",
                            result.language.name(),
                            result.language.native()
                        );
                        let _ = notifier
                            .notify(&title, &result.translated, NotificationIcon::Success)
                            .await;
                    }
                }
            }
        }
    }

    ExitCode::from(exit)
}

/// Take the API key out of a merged config
pub fn get_api_key(config: &AppConfig) -> Result<String, String> {
    config
        .api_key
        .clone()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            "Missing API key. Set GEMINI_API_KEY environment variable or run 'tap-translate config set api_key <key>'".to_string()
        })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
