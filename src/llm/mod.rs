//! Generation backend clients
//!
//! The [`GeneratorClient`] trait abstracts over text-generation backends;
//! [`GeminiClient`] is the concrete implementation for Google's
//! generateContent API. The acquisition layer only sees prompt-in,
//! text-out.

mod error;
mod extract;
mod gemini;

pub use error::LlmError;
pub use extract::extract_json_object;
pub use gemini::GeminiClient;

use async_trait::async_trait;

/// A text-generation backend
#[async_trait]
pub trait GeneratorClient: Send + Sync {
    /// Generate text for a prompt, single attempt
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
