use crate::error::ClarifyError;
use serde::{Deserialize, Serialize};

/// Which simplification policy the server runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimplifyMode {
    /// Syntactic sentence-split transform, no external calls
    Local,
    /// Delegate to the hosted generative-language model
    Remote,
}

impl std::str::FromStr for SimplifyMode {
    type Err = ClarifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => Err(ClarifyError::config(format!(
                "Unknown simplify mode '{}' (expected 'local' or 'remote')",
                other
            ))),
        }
    }
}

/// Clarify application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simplification policy
    pub mode: SimplifyMode,

    /// Gemini API key (absence fails at invocation time, not startup)
    pub gemini_api_key: Option<String>,

    /// Gemini API base URL
    pub gemini_base_url: String,

    /// Generative model name
    pub llm_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Timeout for outbound model calls, in seconds
    pub request_timeout_secs: u64,

    /// Map transformation failures to HTTP error statuses instead of the
    /// always-200 fallback body
    pub strict_errors: bool,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: SimplifyMode::Local,
            gemini_api_key: None,
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            llm_model: "gemini-1.5-flash".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            request_timeout_secs: 30,
            strict_errors: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, ClarifyError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            mode: match std::env::var("SIMPLIFY_MODE") {
                Ok(s) => s.parse()?,
                Err(_) => SimplifyMode::Local,
            },
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            llm_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            strict_errors: std::env::var("STRICT_ERRORS")
                .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ClarifyError> {
        if self.llm_model.is_empty() {
            return Err(ClarifyError::config("LLM model name cannot be empty"));
        }

        if !self.gemini_base_url.starts_with("http://")
            && !self.gemini_base_url.starts_with("https://") {
            return Err(ClarifyError::config(
                "Gemini base URL must start with http:// or https://"
            ));
        }

        if self.server_port == 0 {
            return Err(ClarifyError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
