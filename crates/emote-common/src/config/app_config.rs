//! Application configuration structs
//!
//! Loads configuration from a `.env` file (if present) and environment variables.

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub platform: PlatformConfig,
    pub cache: CacheConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Counter store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Chat platform credentials and endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    pub token: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

/// Live emoji list cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_live_list_ttl")]
    pub live_list_ttl_secs: u64,
    /// Upper bound on a single live-list fetch; unbounded when absent
    #[serde(default)]
    pub live_list_fetch_timeout_secs: Option<u64>,
}

impl CacheConfig {
    #[must_use]
    pub fn live_list_ttl(&self) -> Duration {
        Duration::from_secs(self.live_list_ttl_secs)
    }

    #[must_use]
    pub fn live_list_fetch_timeout(&self) -> Option<Duration> {
        self.live_list_fetch_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            live_list_ttl_secs: default_live_list_ttl(),
            live_list_fetch_timeout_secs: None,
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "emote-tracker".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_database_url() -> String {
    "sqlite://emote_tracker.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_string()
}

fn default_live_list_ttl() -> u64 {
    86400 // 24 hours
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").unwrap_or_else(default_database_url),
                max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: lookup("DATABASE_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            platform: PlatformConfig {
                token: lookup("DISCORD_CLIENT_TOKEN")
                    .filter(|s| !s.trim().is_empty())
                    .ok_or(ConfigError::MissingVar("DISCORD_CLIENT_TOKEN"))?,
                api_base: lookup("DISCORD_API_BASE")
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_api_base),
            },
            cache: CacheConfig {
                live_list_ttl_secs: lookup("LIVE_LIST_TTL_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_live_list_ttl),
                live_list_fetch_timeout_secs: match lookup("LIVE_LIST_FETCH_TIMEOUT_SECS") {
                    Some(s) => Some(s.parse().map_err(|_| {
                        ConfigError::InvalidValue("LIVE_LIST_FETCH_TIMEOUT_SECS", s.clone())
                    })?),
                    None => None,
                },
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
