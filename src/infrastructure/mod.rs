//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the clipboard, the input
//! event stream, and the Gemini API.

pub mod clipboard;
pub mod config;
pub mod input;
pub mod keystroke;
pub mod logging;
pub mod notification;
pub mod translation;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use keystroke::EnigoCopyKeystroke;
pub use notification::NotifyRustNotifier;
pub use translation::GeminiTranslator;
