//! CLI argument definitions using Clap

use std::collections::BTreeMap;
use std::time::Duration;

use clap::{Parser, Subcommand};

/// TapTranslate - translate selected text on a key gesture
#[derive(Parser, Debug)]
#[command(name = "tap-translate")]
#[command(version = "1.0.0")]
#[command(about = "Gesture-triggered AI translation for selected text")]
#[command(long_about = None)]
pub struct Cli {
    /// Number of key releases that make a gesture
    #[arg(long, value_name = "N")]
    pub tap_count: Option<u32>,

    /// Window the releases must fall into, in milliseconds
    #[arg(long, value_name = "MS")]
    pub tap_timeout_ms: Option<u64>,

    /// Minimum time between two accepted gestures, in milliseconds
    #[arg(long, value_name = "MS")]
    pub cooldown_ms: Option<u64>,

    /// Gemini model to use
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Show desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the translation utility (default when no subcommand is given)
    Run,
    /// Launch and supervise the utility, restarting it after crashes
    Supervise,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Resolved options for running the utility
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub api_key: String,
    pub model: Option<String>,
    pub tap_count: usize,
    pub tap_timeout: Duration,
    pub cooldown: Duration,
    pub notify: bool,
    /// Gesture bindings: key name -> target language
    pub bindings: BTreeMap<String, String>,
}

/// Valid scalar config keys; gesture bindings use `bindings.<key>`
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "model",
    "tap_count",
    "tap_timeout_ms",
    "cooldown_ms",
    "notify",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key) || key.strip_prefix("bindings.").is_some_and(|k| !k.is_empty())
}
