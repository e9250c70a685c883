use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_WELCOME_CONFIG_PATH: &str = "config.json";

/// Welcome template used when `WELCOME_MESSAGE` is unset.
///
/// `{user}` is replaced with a mention of the joining member.
pub const DEFAULT_WELCOME_MESSAGE: &str = "Chào mừng {user} đến với máy chủ!";

pub struct Config {
    pub discord_bot_token: String,

    pub welcome_config_path: PathBuf,
    pub welcome_message: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        // Empty values count as missing
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            discord_bot_token: var("DISCORD_BOT_TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            welcome_config_path: var("WELCOME_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WELCOME_CONFIG_PATH)),
            welcome_message: var("WELCOME_MESSAGE")
                .unwrap_or_else(|| DEFAULT_WELCOME_MESSAGE.to_string()),
        })
    }
}
