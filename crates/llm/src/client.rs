use async_trait::async_trait;
use clarify_common::{ClarifyError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Google Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl GeminiClient {
    /// Create new Gemini client
    ///
    /// A missing API key is accepted here; requests will fail with a
    /// configuration error at invocation time.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Gemini client initialized: {} (model: {})", base_url, model);
        Ok(Self { base_url, api_key, model, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ClarifyError::config("GEMINI_API_KEY is not set")
        })?;

        debug!(
            "Sending generateContent request - Model: {}, Prompt length: {}",
            self.model,
            prompt.len()
        );

        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClarifyError::network(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| ClarifyError::llm(format!("Gemini API error: {}", e)))?;

        let result: GenerateContentResponse = response.json().await
            .map_err(|e| ClarifyError::llm(format!("Failed to parse response: {}", e)))?;

        let text = result
            .first_text()
            .ok_or_else(|| ClarifyError::llm("Empty response from Gemini"))?;

        debug!("Received response from Gemini - Length: {}", text.len());

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer, api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(
            server.base_url(),
            api_key.map(String::from),
            "gemini-1.5-flash",
            5,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_trimmed_text() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-1.5-flash:generateContent")
                .header("x-goog-api-key", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "candidates": [
                        {"content": {"parts": [{"text": "  • simplified\n"}], "role": "model"}}
                    ]
                }));
        });

        let client = client_for(&server, Some("test-key"));
        let text = client.generate("simplify this").await.unwrap();

        api_mock.assert();
        assert_eq!(text, "• simplified");
    }

    #[tokio::test]
    async fn test_generate_without_api_key_is_config_error() {
        let server = MockServer::start();
        let client = client_for(&server, None);

        let err = client.generate("simplify this").await.unwrap_err();
        assert_eq!(err.kind(), "configuration");
    }

    #[tokio::test]
    async fn test_generate_http_error_is_llm_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-1.5-flash:generateContent");
            then.status(403);
        });

        let client = client_for(&server, Some("bad-key"));
        let err = client.generate("simplify this").await.unwrap_err();
        assert_eq!(err.kind(), "upstream");
    }

    #[tokio::test]
    async fn test_generate_empty_candidates_is_llm_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-1.5-flash:generateContent");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({}));
        });

        let client = client_for(&server, Some("test-key"));
        let err = client.generate("simplify this").await.unwrap_err();
        assert_eq!(err.kind(), "upstream");
    }
}
