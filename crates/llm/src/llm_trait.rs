use async_trait::async_trait;
use clarify_common::Result;

/// Common trait for LLM clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a text completion from a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}
