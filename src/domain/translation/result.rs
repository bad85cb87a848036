//! Translation result value object

use crate::domain::language::Language;

/// Outcome of one capture-and-translate invocation.
///
/// Backend failures travel through the same type as successes: the
/// `translated` field then carries a human-readable error message instead
/// of translated text. Consumers distinguish the two only by payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    /// The captured source text
    pub original: String,
    /// Translated text, or an error description
    pub translated: String,
    /// The language the trigger requested
    pub language: Language,
}

impl TranslationResult {
    /// A successful translation
    pub fn new(
        original: impl Into<String>,
        translated: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            original: original.into(),
            translated: translated.into(),
            language,
        }
    }

    /// A normalized backend failure carried as a result payload
    pub fn failure(original: impl Into<String>, error: impl Into<String>, language: Language) -> Self {
        Self {
            original: original.into(),
            translated: format!("Error: {}", error.into()),
            language,
        }
    }
}
