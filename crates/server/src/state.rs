use std::sync::Arc;

use clarify_common::{AppConfig, Result, SimplifyMode};
use clarify_llm::{GeminiClient, LocalSimplifier, RemoteSimplifier, Simplifier};
use tracing::info;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Active simplification policy
    pub simplifier: Arc<dyn Simplifier>,
}

impl AppState {
    /// Create application state, selecting the policy from the config
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let simplifier: Arc<dyn Simplifier> = match config.mode {
            SimplifyMode::Local => {
                info!("Using local simplifier");
                Arc::new(LocalSimplifier)
            }
            SimplifyMode::Remote => {
                info!("Using remote simplifier (model: {})", config.llm_model);
                let client = GeminiClient::new(
                    config.gemini_base_url.clone(),
                    config.gemini_api_key.clone(),
                    config.llm_model.clone(),
                    config.request_timeout_secs,
                )?;
                Arc::new(RemoteSimplifier::new(Arc::new(client)))
            }
        };

        Ok(Self { config, simplifier })
    }

    /// Create state with an explicit simplifier (used by tests)
    pub fn with_simplifier(config: AppConfig, simplifier: Arc<dyn Simplifier>) -> Self {
        Self { config, simplifier }
    }
}
