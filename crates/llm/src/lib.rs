//! Clarify LLM Integration
//!
//! Gemini API client and text simplification policies

mod client;
mod llm_trait;
mod local;
mod prompts;
mod simplifier;
mod types;

pub use client::GeminiClient;
pub use llm_trait::LlmClient;
pub use local::bullet_summary;
pub use prompts::{simplify_prompt, MAX_INPUT_CHARS, SIMPLIFY_INSTRUCTION};
pub use simplifier::{LocalSimplifier, RemoteSimplifier, Simplifier, NO_TEXT_MESSAGE};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
