//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod capture;
pub mod ports;
pub mod queue;
pub mod translate;

// Re-export use cases
pub use capture::{CaptureSettings, NoSelectionError, SelectionCapture};
pub use queue::ResultQueue;
pub use translate::{TranslateSelectionUseCase, NO_SELECTION_MESSAGE};
