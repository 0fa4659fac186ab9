pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, SimplifyMode};
pub use error::ClarifyError;
pub type Result<T> = std::result::Result<T, ClarifyError>;
