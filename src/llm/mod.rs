//! Generation call boundary
//!
//! The planner only needs one capability from the model provider: send free
//! text instructions plus a structural response schema and get raw JSON text
//! back. [`GenerationClient`] is that seam; [`GeminiClient`] implements it
//! over HTTP.

use async_trait::async_trait;
use serde_json::Value;

mod error;
mod gemini;

pub use error::GenerationError;
pub use gemini::GeminiClient;

/// Everything needed for one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Model identifier, e.g. "gemini-2.5-pro"
    pub model: String,
    /// Natural-language instructions
    pub instructions: String,
    /// Structural schema the response must follow
    pub schema: Value,
    /// Sampling temperature
    pub temperature: f32,
}

/// A provider able to answer a [`GenerationRequest`] with raw JSON text
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Issue one generation call and return the raw response text.
    ///
    /// The key is passed per call so a missing credential can be rejected
    /// before any client is touched.
    async fn generate(
        &self,
        api_key: &str,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError>;
}
