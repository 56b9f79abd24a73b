use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings for the hosted completion provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    /// Bearer credential for the provider; chat requests fail without it
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
    #[serde(default)]
    pub default_model: Option<String>,
    /// Custom OpenAI-compatible endpoint
    #[serde(default)]
    pub base_url: Option<String>,
    pub temperature: f64,
    /// Upper bound for a single completion call, unbounded when unset
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            // Override with environment variables using `COMPANION__` prefix and `__` separator
            // e.g., COMPANION__SERVER__PORT=8080
            .add_source(
                config::Environment::with_prefix("COMPANION")
                    .prefix_separator("__")
                    .separator("__"),
            )
            // Conventional provider variables win over prefixed ones
            .set_override_option("ai.api_key", std::env::var("OPENAI_API_KEY").ok())?
            .set_override_option("ai.default_model", std::env::var("OPENAI_MODEL").ok())?
            .set_override_option("ai.base_url", std::env::var("OPENAI_BASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl ServerConfig {
    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AiConfig {
    /// The provider credential, if one is set and not blank.
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

// Default values for the server configuration
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_model: None,
            base_url: None,
            temperature: 0.7,
            request_timeout_seconds: None,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use serde to serialize to pretty JSON
        // The API key is skipped by #[serde(skip_serializing)]
        match serde_json::to_string_pretty(&self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "Error serializing config"),
        }
    }
}
