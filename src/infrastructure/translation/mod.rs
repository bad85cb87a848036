//! Translation backend adapters

pub mod gemini;

pub use gemini::GeminiTranslator;
