//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_COOLDOWN_MS, DEFAULT_TAP_COUNT, DEFAULT_TAP_TIMEOUT_MS,
};
