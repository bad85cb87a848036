//! Target language value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidLanguageError;

/// Known target languages: (display name, ISO code, native name).
///
/// A representative set; both the display name and the ISO code are
/// accepted when parsing, case-insensitively.
const CATALOG: &[(&str, &str, &str)] = &[
    ("Vietnamese", "vi", "Tiếng Việt"),
    ("English", "en", "English"),
    ("Japanese", "ja", "日本語"),
    ("Chinese Simplified", "zh-CN", "中文简体"),
    ("Chinese Traditional", "zh-TW", "中文繁體"),
    ("Korean", "ko", "한국어"),
    ("French", "fr", "Français"),
    ("German", "de", "Deutsch"),
    ("Spanish", "es", "Español"),
    ("Italian", "it", "Italiano"),
    ("Portuguese", "pt", "Português"),
    ("Russian", "ru", "Русский"),
    ("Thai", "th", "ไทย"),
    ("Indonesian", "id", "Bahasa Indonesia"),
    ("Malay", "ms", "Bahasa Melayu"),
    ("Hindi", "hi", "हिन्दी"),
    ("Arabic", "ar", "العربية"),
    ("Dutch", "nl", "Nederlands"),
    ("Polish", "pl", "Polski"),
    ("Turkish", "tr", "Türkçe"),
    ("Swedish", "sv", "Svenska"),
    ("Danish", "da", "Dansk"),
    ("Norwegian", "no", "Norsk"),
    ("Finnish", "fi", "Suomi"),
    ("Greek", "el", "Ελληνικά"),
    ("Czech", "cs", "Čeština"),
    ("Romanian", "ro", "Română"),
    ("Hungarian", "hu", "Magyar"),
    ("Ukrainian", "uk", "Українська"),
];

/// A validated target language.
///
/// Immutable value object; carried by triggers and translation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    name: &'static str,
    code: &'static str,
    native: &'static str,
}

impl Language {
    /// Human-readable English name (used in prompts)
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// ISO code (used in config files)
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Native-script name (used in user-facing output)
    pub const fn native(&self) -> &'static str {
        self.native
    }

    /// All known languages
    pub fn all() -> impl Iterator<Item = Language> {
        CATALOG
            .iter()
            .map(|&(name, code, native)| Language { name, code, native })
    }
}

impl FromStr for Language {
    type Err = InvalidLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::all()
            .find(|l| l.name.eq_ignore_ascii_case(wanted) || l.code.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InvalidLanguageError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
