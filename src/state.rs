use crate::{
    config::Config,
    error::Result,
    providers::{CompletionProvider, OpenAiProvider},
};
use std::sync::Arc;

/// Application state shared across all HTTP handlers
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Completion provider, absent when no API key is configured
    pub provider: Option<Arc<dyn CompletionProvider>>,
}

impl AppState {
    /// Create a new AppState, building the OpenAI provider when a key is set
    pub fn new(config: Config) -> Result<Self> {
        let provider: Option<Arc<dyn CompletionProvider>> = match config.ai.api_key() {
            Some(api_key) => {
                let provider = OpenAiProvider::new(api_key, config.ai.base_url.as_deref())?
                    .with_temperature(config.ai.temperature);
                Some(Arc::new(provider) as Arc<dyn CompletionProvider>)
            }
            None => None,
        };

        Ok(Self {
            config: Arc::new(config),
            provider,
        })
    }

    /// Create an AppState around an existing provider
    ///
    /// # Arguments
    /// * `config` - Application configuration
    /// * `provider` - Completion provider to dispatch chat requests to
    pub fn with_provider(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider: Some(provider),
        }
    }
}
