//! Plan generation orchestrator:
//! validate → cache probe → prompt → timed model call → per-field compose →
//! cache store. Model-side failures never surface — they degrade silently
//! to templated fallback content. Only malformed caller input is an error.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde_json::{Map, Value};

use super::cache::{fingerprint, PlanCache};
use super::completion::TimedCompletion;
use super::fallback;
use super::ollama::{ModelClient, ModelConfig};
use super::parser::parse_plan_response;
use super::prompt::build_plan_prompt;
use super::validation::{coerce_text, validate_assessment};
use super::PlanError;
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::models::{AssessmentInput, RehabPlanOutput};

/// The public plan-generation operation.
///
/// Owns the model client (behind a trait object for mocking), the
/// generation parameters, the timeout budget, and the response cache. One
/// instance serves many requests; the cache is guarded so concurrent
/// callers cannot lose inserts or race an eviction.
pub struct PlanGenerator {
    client: Arc<dyn ModelClient + Send + Sync>,
    config: ModelConfig,
    budget: Duration,
    cache: Mutex<PlanCache>,
}

impl PlanGenerator {
    /// Generator with default model parameters, budget, and cache capacity.
    pub fn new(client: Arc<dyn ModelClient + Send + Sync>) -> Self {
        Self {
            client,
            config: ModelConfig::default(),
            budget: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache: Mutex::new(PlanCache::new()),
        }
    }

    pub fn with_config(mut self, config: ModelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = Mutex::new(PlanCache::with_capacity(capacity));
        self
    }

    /// Generate a rehabilitation plan for one assessment.
    ///
    /// Returns `Err` only for invalid input. A cache hit returns the stored
    /// plan unchanged with no model call; on a miss the model is invoked
    /// once under the timeout budget and every missing or malformed output
    /// field is individually replaced with fallback content.
    pub fn generate_plan(&self, input: &AssessmentInput) -> Result<RehabPlanOutput, PlanError> {
        let _span = tracing::info_span!("generate_plan", age = input.age).entered();

        validate_assessment(input)?;
        let key = fingerprint(input);

        if let Some(hit) = self.lock_cache().get(&key).cloned() {
            tracing::info!("Plan served from cache");
            return Ok(hit);
        }

        let prompt = build_plan_prompt(input);
        let completion = TimedCompletion::with_budget(Arc::clone(&self.client), self.budget);

        let plan = match completion.invoke(prompt, &self.config) {
            Ok(response) => match parse_plan_response(&response) {
                Ok(raw_fields) => {
                    let (plan, substituted) = compose_plan(raw_fields, input);
                    if substituted > 0 {
                        tracing::warn!(
                            substituted,
                            "Model output incomplete, fallback sections substituted"
                        );
                    }
                    plan
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Unusable model response, using full fallback");
                    fallback::fallback_plan(input)
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Model invocation failed, using full fallback");
                fallback::fallback_plan(input)
            }
        };

        self.lock_cache().put(key, plan.clone());
        Ok(plan)
    }

    fn lock_cache(&self) -> MutexGuard<'_, PlanCache> {
        // A poisoned lock still holds a structurally valid cache, and this
        // operation must never surface a non-validation error.
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Field-by-field reducer over the model's raw output.
///
/// For each of the seven sections: use the model's value when it coerces to
/// non-empty text, otherwise substitute the corresponding fallback section.
/// Returns the composed plan and how many sections were substituted.
fn compose_plan(
    mut raw: Map<String, Value>,
    input: &AssessmentInput,
) -> (RehabPlanOutput, usize) {
    let mut substituted = 0;
    let mut section = |key: &str, fallback: String| match coerce_text(raw.remove(key)) {
        Some(text) => text,
        None => {
            substituted += 1;
            fallback
        }
    };

    let plan = RehabPlanOutput {
        initial_diagnosis: section("initialDiagnosis", fallback::initial_diagnosis(input)),
        prognosis: section("prognosis", fallback::prognosis(input)),
        rehab_plan: section("rehabPlan", fallback::rehab_plan(input)),
        precautions: section("precautions", fallback::precautions(input)),
        medications_influence: section(
            "medicationsInfluence",
            fallback::medications_influence(input),
        ),
        fractures_influence: section("fracturesInfluence", fallback::fractures_influence(input)),
        review_appointments: section("reviewAppointments", fallback::review_appointments()),
    };

    drop(section);
    (plan, substituted)
}
