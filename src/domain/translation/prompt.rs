//! Translation prompt value object

use crate::domain::language::Language;

/// Value object representing the complete system instruction for a
/// translation request. The captured text itself travels separately as
/// user content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPrompt {
    content: String,
}

impl TranslationPrompt {
    /// Build the instruction for translating into `language`
    pub fn build(language: Language) -> Self {
        let content = format!(
            "Translate the following text to {target}.\n\
             Only return the translation, no explanations or additional text.\n\
             If the text is already in {target}, still provide a natural rephrasing.\n\
             \n\
             If currency amounts are mentioned (like $, €, £, ¥, ₫, etc.), add the approximate\n\
             equivalent in the target language's local currency in parentheses after each amount.",
            target = language.name()
        );
        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}
