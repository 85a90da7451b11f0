pub mod cache;
pub mod completion;
pub mod fallback;
pub mod ollama;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod validation;

pub use cache::{fingerprint, Fingerprint, PlanCache};
pub use completion::TimedCompletion;
pub use fallback::fallback_plan;
pub use ollama::{MockModelClient, ModelClient, ModelConfig, OllamaClient};
pub use orchestrator::PlanGenerator;
pub use parser::parse_plan_response;
pub use prompt::{build_plan_prompt, PLAN_SYSTEM_PROMPT};
pub use validation::{coerce_text, validate_assessment};

use thiserror::Error;

/// Everything that can go wrong between intake and plan.
///
/// Only `Validation` ever crosses the `generate_plan` boundary — every
/// model-side failure (timeout, transport, malformed output) is recovered
/// internally by substituting fallback content.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid assessment field '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Model call exceeded the {0}s budget")]
    Timeout(u64),

    #[error("Ollama is not running at {0}")]
    ModelConnection(String),

    #[error("Model returned error (status {status}): {body}")]
    ModelError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}

impl PlanError {
    /// True for the one error class the caller is meant to see.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
