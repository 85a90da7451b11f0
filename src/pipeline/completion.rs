//! Timeout race around a model invocation.
//!
//! The model call runs on its own thread and reports through a channel;
//! `recv_timeout` decides whether the call or the timer wins. The losing
//! call is not cancelled — its eventual result lands in a disconnected
//! channel and is discarded. One attempt per request, no retries: fallback
//! content substitutes for retry.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::ollama::{ModelClient, ModelConfig};
use super::PlanError;
use crate::config::DEFAULT_TIMEOUT_SECS;

/// A model client raced against a fixed time budget.
pub struct TimedCompletion {
    client: Arc<dyn ModelClient + Send + Sync>,
    budget: Duration,
}

impl TimedCompletion {
    /// Race `client` against the default 25-second budget.
    pub fn new(client: Arc<dyn ModelClient + Send + Sync>) -> Self {
        Self::with_budget(client, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_budget(client: Arc<dyn ModelClient + Send + Sync>, budget: Duration) -> Self {
        Self { client, budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Invoke the model, failing with `PlanError::Timeout` if the budget
    /// elapses first.
    pub fn invoke(&self, prompt: String, config: &ModelConfig) -> Result<String, PlanError> {
        let (tx, rx) = mpsc::channel();
        let client = Arc::clone(&self.client);
        let config = config.clone();

        thread::spawn(move || {
            // The receiver may be gone if the timer already won; the send
            // result is irrelevant either way.
            let _ = tx.send(client.generate(&prompt, &config));
        });

        match rx.recv_timeout(self.budget) {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    budget_secs = self.budget.as_secs(),
                    "Model invocation exceeded budget, discarding in-flight call"
                );
                Err(PlanError::Timeout(self.budget.as_secs()))
            }
        }
    }
}
