//! CLI presenter for output formatting

use colored::*;

use crate::domain::translation::TranslationResult;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print utility status
    pub fn app_status(&self, state: &str) {
        eprintln!("{} TapTranslate: {}", "●".cyan(), state);
    }

    /// Print one translation result; the payload goes to stdout, the
    /// surrounding context to stderr
    pub fn translation(&self, result: &TranslationResult) {
        eprintln!(
            "{} {} ({})",
            "●".cyan(),
            result.language.name().bold(),
            result.language.native()
        );
        if !result.original.is_empty() {
            eprintln!("{} {}", "«".dimmed(), result.original.dimmed());
        }
        println!("{}", result.translated);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
