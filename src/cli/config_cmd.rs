//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::language::Language;
use crate::infrastructure::input::parse_key_name;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(unknown_key_error(key));
    }

    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    if let Some(binding_key) = key.strip_prefix("bindings.") {
        // Adding a binding starts from the defaults so the stock
        // gestures survive the first customization
        let mut bindings = config.bindings_or_default();
        bindings.insert(binding_key.to_string(), value.to_string());
        config.bindings = Some(bindings);
    } else {
        match key {
            "api_key" => config.api_key = Some(value.to_string()),
            "model" => config.model = Some(value.to_string()),
            "tap_count" => config.tap_count = value.parse().ok(),
            "tap_timeout_ms" => config.tap_timeout_ms = value.parse().ok(),
            "cooldown_ms" => config.cooldown_ms = value.parse().ok(),
            "notify" => {
                config.notify = Some(parse_bool(value).map_err(|_| bool_error(key))?);
            }
            _ => unreachable!(), // Already validated
        }
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(unknown_key_error(key));
    }

    let config = store.load().await?;

    let value = if let Some(binding_key) = key.strip_prefix("bindings.") {
        config
            .bindings
            .as_ref()
            .and_then(|b| b.get(binding_key).cloned())
    } else {
        match key {
            "api_key" => config.api_key.map(|s| mask_api_key(&s)),
            "model" => config.model,
            "tap_count" => config.tap_count.map(|v| v.to_string()),
            "tap_timeout_ms" => config.tap_timeout_ms.map(|v| v.to_string()),
            "cooldown_ms" => config.cooldown_ms.map(|v| v.to_string()),
            "notify" => config.notify.map(|b| b.to_string()),
            _ => unreachable!(),
        }
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "api_key",
        &config
            .api_key
            .map(|s| mask_api_key(&s))
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("model", config.model.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "tap_count",
        &config
            .tap_count
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "tap_timeout_ms",
        &config
            .tap_timeout_ms
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "cooldown_ms",
        &config
            .cooldown_ms
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "notify",
        &config
            .notify
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );

    for (key, language) in config.bindings.unwrap_or_else(AppConfig::default_bindings) {
        presenter.key_value(&format!("bindings.{}", key), &language);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn unknown_key_error(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: format!(
            "Unknown key. Valid keys: {}, bindings.<key>",
            VALID_CONFIG_KEYS.join(", ")
        ),
    }
}

fn bool_error(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    if let Some(binding_key) = key.strip_prefix("bindings.") {
        if parse_key_name(binding_key).is_none() {
            return Err(ConfigError::ValidationError {
                key: key.to_string(),
                message: format!("Unknown key name '{}'", binding_key),
            });
        }
        value
            .parse::<Language>()
            .map_err(|e| ConfigError::ValidationError {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        return Ok(());
    }

    match key {
        "tap_count" => {
            let count: u32 = value.parse().map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be a positive integer".to_string(),
            })?;
            if count == 0 {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be at least 1".to_string(),
                });
            }
        }
        "tap_timeout_ms" | "cooldown_ms" => {
            value
                .parse::<u64>()
                .map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a duration in milliseconds".to_string(),
                })?;
        }
        "notify" => {
            parse_bool(value).map_err(|_| bool_error(key))?;
        }
        _ => {} // api_key and model accept any string
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    if key.len() <= 8 {
        "*".repeat(key.len())
    } else {
        format!("{}...{}", &key[..4], &key[key.len() - 4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn mask_api_key_long() {
        let masked = mask_api_key("abcdefghijklmnop");
        assert_eq!(masked, "abcd...mnop");
    }

    #[test]
    fn mask_api_key_short() {
        let masked = mask_api_key("short");
        assert_eq!(masked, "*****");
    }

    #[test]
    fn validate_tap_count() {
        assert!(validate_config_value("tap_count", "2").is_ok());
        assert!(validate_config_value("tap_count", "0").is_err());
        assert!(validate_config_value("tap_count", "lots").is_err());
    }

    #[test]
    fn validate_durations() {
        assert!(validate_config_value("cooldown_ms", "2000").is_ok());
        assert!(validate_config_value("tap_timeout_ms", "soon").is_err());
    }

    #[test]
    fn validate_binding_key_and_language() {
        assert!(validate_config_value("bindings.f2", "ko").is_ok());
        assert!(validate_config_value("bindings.f2", "klingon").is_err());
        assert!(validate_config_value("bindings.notakey", "ko").is_err());
    }

    #[test]
    fn validate_free_form_keys() {
        assert!(validate_config_value("api_key", "anything").is_ok());
        assert!(validate_config_value("model", "gemini-2.0-flash").is_ok());
    }

    #[tokio::test]
    async fn set_and_get_binding_round_trip() {
        use crate::infrastructure::XdgConfigStore;

        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "bindings.f2", "ko")
            .await
            .unwrap();

        let config = store.load().await.unwrap();
        let bindings = config.bindings.unwrap();
        assert_eq!(bindings.get("f2").map(String::as_str), Some("ko"));
        // Stock bindings are preserved alongside the new one
        assert!(bindings.contains_key("f6"));
    }

    #[tokio::test]
    async fn set_rejects_unknown_key() {
        use crate::infrastructure::XdgConfigStore;

        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        let result = handle_set(&store, &presenter, "nonsense", "1").await;
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
