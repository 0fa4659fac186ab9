use serde::{Deserialize, Serialize};

/// Simplify request body
#[derive(Debug, Deserialize)]
pub struct SimplifyRequest {
    /// Raw text to simplify (defaults to empty when absent)
    #[serde(default)]
    pub text: String,
}

/// Simplify response body
#[derive(Debug, Serialize, Deserialize)]
pub struct SimplifyResponse {
    /// Simplified text
    pub simplified: String,
}

/// Structured error body (strict-error mode only)
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub error: String,

    /// Human-readable detail
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
