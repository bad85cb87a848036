//! Clipboard adapters

mod arboard;

pub use self::arboard::ArboardClipboard;
