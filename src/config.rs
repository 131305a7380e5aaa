use crate::error::{Result as VeikkausResult, VeikkausError};
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

pub const DEFAULT_API_URL: &str = "https://www.veikkaus.fi/api";
pub const ACCOUNT_ENV: &str = "VEIKKAUS_ACCOUNT";
pub const PASSWORD_ENV: &str = "VEIKKAUS_PASSWORD";

#[derive(Clone, Deserialize)]
pub struct VeikkausConfig {
    /// Account name; empty means "read VEIKKAUS_ACCOUNT".
    #[serde(default)]
    pub account: String,
    /// Account password; empty means "read VEIKKAUS_PASSWORD".
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_api_key() -> String {
    "ROBOT".to_string()
}

fn default_language() -> String {
    "fi".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for VeikkausConfig {
    fn default() -> Self {
        Self {
            account: String::new(),
            password: String::new(),
            api_url: default_api_url(),
            api_key: default_api_key(),
            language: default_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for VeikkausConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VeikkausConfig")
            .field("account", &self.account)
            .field("password", &"***")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key)
            .field("language", &self.language)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub veikkaus: VeikkausConfig,
}

/// Login credentials after the environment fallback has been applied.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("password", &"***")
            .finish()
    }
}

impl Config {
    /// Load `config.toml` from the working directory.
    pub fn new() -> Result<Self> {
        Self::from_path("config.toml")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&config_str)?;
        info!("Config: {:?}", config);
        Ok(config)
    }

    /// Defaults everywhere; credentials come from the environment at client construction.
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn with_credentials(account: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            veikkaus: VeikkausConfig {
                account: account.into(),
                password: password.into(),
                ..Default::default()
            },
        }
    }

    pub fn credentials(&self) -> VeikkausResult<Credentials> {
        self.resolve_credentials(|key| std::env::var(key).ok())
    }

    /// Explicit values win; empty ones fall back to `lookup(VEIKKAUS_*)`.
    pub fn resolve_credentials<F>(&self, lookup: F) -> VeikkausResult<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let password = non_empty(&self.veikkaus.password)
            .or_else(|| lookup(PASSWORD_ENV).filter(|v| !v.is_empty()))
            .ok_or(VeikkausError::MissingCredentials(PASSWORD_ENV))?;

        let account = non_empty(&self.veikkaus.account)
            .or_else(|| lookup(ACCOUNT_ENV).filter(|v| !v.is_empty()))
            .ok_or(VeikkausError::MissingCredentials(ACCOUNT_ENV))?;

        Ok(Credentials { account, password })
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
