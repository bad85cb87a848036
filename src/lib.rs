//! TapTranslate - gesture-triggered AI translation for selected text
//!
//! A background utility that watches for repeated key-release gestures,
//! captures the current selection through the clipboard, translates it
//! with Google Gemini, and surfaces results without ever blocking the
//! input-event stream. A separate supervisor process keeps it alive
//! across crashes.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Gesture detection, cooldown, restart policy, value objects
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (rdev, arboard, enigo, Gemini, etc.)
//! - **CLI**: Command-line interface, the runners, and the single-instance guard

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
