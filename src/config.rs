use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{DEFAULT_JUDGE_BASE_URL, DEFAULT_JUDGE_TIMEOUT_SECS};

#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub store_path: String,
    pub judge: JudgeConfig,
}

#[derive(Debug, Clone)]
pub struct JudgeConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_JUDGE_BASE_URL.to_string(),
            timeout_secs: DEFAULT_JUDGE_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BOT_TOKEN (or DISCORD_TOKEN) must be set")]
    MissingBotToken,
    #[error("invalid JUDGE_BASE_URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"***REDACTED***")
            .field("log_level", &self.log_level)
            .field("enable_file_logs", &self.enable_file_logs)
            .field("log_dir", &self.log_dir)
            .field("store_path", &self.store_path)
            .field("judge", &self.judge)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        let bot_token = env::var("BOT_TOKEN")
            .or_else(|_| env::var("DISCORD_TOKEN"))
            .unwrap_or_default();

        Self {
            bot_token: bot_token.trim().to_string(),
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            store_path: env_or("STORE_PATH", "./data/cf-companion.sled"),
            judge: JudgeConfig {
                base_url: env_or("JUDGE_BASE_URL", DEFAULT_JUDGE_BASE_URL),
                timeout_secs: env_or_parse("JUDGE_TIMEOUT_SECS", DEFAULT_JUDGE_TIMEOUT_SECS),
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_token.is_empty() {
            return Err(ConfigError::MissingBotToken);
        }
        if let Err(e) = reqwest::Url::parse(&self.judge.base_url) {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.judge.base_url.clone(),
                reason: e.to_string(),
            });
        }
        Ok(())
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
