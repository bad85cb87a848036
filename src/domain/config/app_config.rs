//! Application configuration value object

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of qualifying key releases
pub const DEFAULT_TAP_COUNT: u32 = 2;
/// Default window the releases must fall into
pub const DEFAULT_TAP_TIMEOUT_MS: u64 = 400;
/// Default minimum time between two accepted triggers
pub const DEFAULT_COOLDOWN_MS: u64 = 2000;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub tap_count: Option<u32>,
    pub tap_timeout_ms: Option<u64>,
    pub cooldown_ms: Option<u64>,
    pub notify: Option<bool>,
    /// Gesture bindings: key name -> target language (name or ISO code)
    pub bindings: Option<BTreeMap<String, String>>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: None,
            tap_count: Some(DEFAULT_TAP_COUNT),
            tap_timeout_ms: Some(DEFAULT_TAP_TIMEOUT_MS),
            cooldown_ms: Some(DEFAULT_COOLDOWN_MS),
            notify: Some(true),
            bindings: Some(Self::default_bindings()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// The out-of-the-box gesture bindings
    pub fn default_bindings() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("f6".to_string(), "vi".to_string()),
            ("f7".to_string(), "en".to_string()),
            ("f8".to_string(), "ja".to_string()),
            ("f9".to_string(), "zh-CN".to_string()),
        ])
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this. A bindings
    /// table from `other` replaces the whole table, it is not merged
    /// entry by entry.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            tap_count: other.tap_count.or(self.tap_count),
            tap_timeout_ms: other.tap_timeout_ms.or(self.tap_timeout_ms),
            cooldown_ms: other.cooldown_ms.or(self.cooldown_ms),
            notify: other.notify.or(self.notify),
            bindings: other.bindings.or(self.bindings),
        }
    }

    /// Get tap count, clamped to at least 1
    pub fn tap_count_or_default(&self) -> usize {
        self.tap_count.unwrap_or(DEFAULT_TAP_COUNT).max(1) as usize
    }

    /// Get the tap window as a Duration
    pub fn tap_timeout_or_default(&self) -> Duration {
        Duration::from_millis(self.tap_timeout_ms.unwrap_or(DEFAULT_TAP_TIMEOUT_MS))
    }

    /// Get the cooldown as a Duration
    pub fn cooldown_or_default(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms.unwrap_or(DEFAULT_COOLDOWN_MS))
    }

    /// Get notify setting, or true if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(true)
    }

    /// Get the bindings table, or the defaults if not set
    pub fn bindings_or_default(&self) -> BTreeMap<String, String> {
        self.bindings.clone().unwrap_or_else(Self::default_bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.api_key.is_none());
        assert_eq!(config.tap_count, Some(2));
        assert_eq!(config.tap_timeout_ms, Some(400));
        assert_eq!(config.cooldown_ms, Some(2000));
        assert_eq!(config.notify, Some(true));
        assert_eq!(config.bindings_or_default().len(), 4);
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.api_key.is_none());
        assert!(config.model.is_none());
        assert!(config.tap_count.is_none());
        assert!(config.cooldown_ms.is_none());
        assert!(config.bindings.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            api_key: Some("base_key".to_string()),
            cooldown_ms: Some(2000),
            tap_count: Some(2),
            ..Default::default()
        };

        let other = AppConfig {
            api_key: Some("other_key".to_string()),
            cooldown_ms: None, // Should not override
            tap_count: Some(3),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.api_key, Some("other_key".to_string()));
        assert_eq!(merged.cooldown_ms, Some(2000)); // Kept from base
        assert_eq!(merged.tap_count, Some(3));
    }

    #[test]
    fn merge_replaces_bindings_wholesale() {
        let base = AppConfig {
            bindings: Some(AppConfig::default_bindings()),
            ..Default::default()
        };
        let other = AppConfig {
            bindings: Some(BTreeMap::from([("f2".to_string(), "ko".to_string())])),
            ..Default::default()
        };

        let merged = base.merge(other);
        let bindings = merged.bindings_or_default();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.get("f2").map(String::as_str), Some("ko"));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            api_key: Some("key".to_string()),
            notify: Some(false),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.api_key, Some("key".to_string()));
        assert_eq!(merged.notify, Some(false));
    }

    #[test]
    fn accessor_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.tap_count_or_default(), 2);
        assert_eq!(config.tap_timeout_or_default(), Duration::from_millis(400));
        assert_eq!(config.cooldown_or_default(), Duration::from_millis(2000));
        assert!(config.notify_or_default());
    }

    #[test]
    fn tap_count_is_clamped() {
        let config = AppConfig {
            tap_count: Some(0),
            ..Default::default()
        };
        assert_eq!(config.tap_count_or_default(), 1);
    }

    #[test]
    fn default_bindings_parse_as_languages() {
        for (key, value) in AppConfig::default_bindings() {
            assert!(!key.is_empty());
            assert!(
                value.parse::<crate::domain::language::Language>().is_ok(),
                "default binding {key} -> {value} must name a known language"
            );
        }
    }
}
