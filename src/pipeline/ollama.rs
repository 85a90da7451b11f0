use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::PlanError;
use crate::config::{
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TOP_P,
};

/// Generation parameters passed through to the model unchanged.
///
/// These affect model behavior only — orchestration (caching, timeout,
/// fallback) never branches on them.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            top_p: DEFAULT_TOP_P,
        }
    }
}

/// Model invocation abstraction (allows mocking).
pub trait ModelClient {
    fn generate(&self, prompt: &str, config: &ModelConfig) -> Result<String, PlanError>;
}

/// Ollama HTTP client for local model inference.
pub struct OllamaClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl OllamaClient {
    /// Create a new OllamaClient pointing at an Ollama instance.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Default Ollama instance at localhost:11434.
    pub fn default_local() -> Self {
        Self::new("http://localhost:11434")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
    top_p: f32,
    num_predict: u32,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl ModelClient for OllamaClient {
    fn generate(&self, prompt: &str, config: &ModelConfig) -> Result<String, PlanError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = OllamaGenerateRequest {
            model: &config.model,
            prompt,
            system: super::prompt::PLAN_SYSTEM_PROMPT,
            stream: false,
            options: OllamaOptions {
                temperature: config.temperature,
                top_p: config.top_p,
                num_predict: config.max_output_tokens,
            },
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                PlanError::ModelConnection(self.base_url.clone())
            } else {
                PlanError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(PlanError::ModelError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaGenerateResponse = response
            .json()
            .map_err(|e| PlanError::ResponseParsing(e.to_string()))?;

        Ok(parsed.response)
    }
}

/// Mock model client for testing — configurable response, failure mode,
/// artificial delay, and a call counter for at-most-once assertions.
pub struct MockModelClient {
    response: Option<String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockModelClient {
    /// Mock that always returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that always fails with a connection error.
    pub fn failing() -> Self {
        Self {
            response: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep for `delay` before answering (for timeout-race tests).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many times `generate` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ModelClient for MockModelClient {
    fn generate(&self, _prompt: &str, _config: &ModelConfig) -> Result<String, PlanError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        match &self.response {
            Some(r) => Ok(r.clone()),
            None => Err(PlanError::ModelConnection("mock://down".into())),
        }
    }
}
