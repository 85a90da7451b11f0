use serde_json::Value;

use super::PlanError;
use crate::models::AssessmentInput;

/// Oldest plausible patient age; the form rejects anything above.
const MAX_AGE: u32 = 150;

/// Validate intake invariants before any cache lookup or prompt work.
///
/// Enum validity is already guaranteed by the type (serde rejects bad enum
/// strings at the form boundary); what remains is the trimming and range
/// rules. Fails naming the first offending field — input-shape errors are
/// caller bugs and are the only errors `generate_plan` surfaces.
pub fn validate_assessment(input: &AssessmentInput) -> Result<(), PlanError> {
    if input.job.trim().is_empty() {
        return Err(PlanError::Validation {
            field: "job".into(),
            reason: "must not be empty".into(),
        });
    }
    if input.symptoms.trim().is_empty() {
        return Err(PlanError::Validation {
            field: "symptoms".into(),
            reason: "must not be empty".into(),
        });
    }
    if input.age == 0 || input.age >= MAX_AGE {
        return Err(PlanError::Validation {
            field: "age".into(),
            reason: format!("must be a positive integer below {MAX_AGE}, got {}", input.age),
        });
    }
    Ok(())
}

/// Normalize one model-output field to usable text.
///
/// The leniency rule for minor model misbehavior: a non-empty string passes
/// through trimmed; null, absence, and empty strings yield `None` (the
/// orchestrator substitutes the fallback section); any other JSON value is
/// coerced to its textual serialization rather than rejected.
pub fn coerce_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
