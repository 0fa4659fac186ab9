use std::sync::Arc;

use async_trait::async_trait;
use clarify_common::Result;
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::local::bullet_summary;
use crate::prompts::simplify_prompt;

/// Canned response for empty input on the remote policy
pub const NO_TEXT_MESSAGE: &str = "No text provided.";

/// A simplification policy
#[async_trait]
pub trait Simplifier: Send + Sync {
    /// Transform raw text into a simplified bullet form
    async fn simplify(&self, text: &str) -> Result<String>;
}

/// Sentence-split policy, runs entirely in-process
pub struct LocalSimplifier;

#[async_trait]
impl Simplifier for LocalSimplifier {
    async fn simplify(&self, text: &str) -> Result<String> {
        debug!("Local simplification - Text length: {}", text.len());
        Ok(bullet_summary(text))
    }
}

/// Policy delegating to a hosted generative-language model
pub struct RemoteSimplifier {
    client: Arc<dyn LlmClient>,
}

impl RemoteSimplifier {
    /// Create new remote simplifier over any LLM client
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Simplifier for RemoteSimplifier {
    async fn simplify(&self, text: &str) -> Result<String> {
        // Empty input never reaches the model
        if text.is_empty() {
            return Ok(NO_TEXT_MESSAGE.to_string());
        }

        info!("Remote simplification - Text length: {} chars", text.len());

        let prompt = simplify_prompt(text);
        let response = self.client.generate(&prompt).await?;

        Ok(response.trim().to_string())
    }
}
