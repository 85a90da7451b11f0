//! Deterministic rule-based plan content.
//!
//! Last line of defense: pure, no network access, cannot fail. The
//! orchestrator invokes these per-field (replacing individual sections the
//! model missed) or wholesale (when the model call itself failed). The
//! templated wording is behaviorally significant — tests assert on the
//! fixed sentences, and the no-impact/caution sentences are part of the
//! caller-visible contract.

use crate::models::{AssessmentInput, Mobility, RehabPlanOutput};

pub const NO_MEDICATIONS_IMPACT: &str =
    "The patient reports no current medications affecting the rehabilitation plan.";

pub const MEDICATIONS_CAUTION: &str = "Current medications may affect pain perception and \
     exercise tolerance; progress should be monitored alongside the medication schedule.";

pub const NO_FRACTURES_IMPACT: &str =
    "The patient reports no fractures affecting the rehabilitation plan.";

pub const FRACTURES_CAUTION: &str = "A history of fractures requires protected loading and \
     slower progression; weight-bearing exercises must be cleared by the treating physician.";

/// The form convention is "no" or "yes - <details>"; anything mentioning
/// "yes" counts as an affirmative answer.
fn is_affirmative(field: &str) -> bool {
    field.to_lowercase().contains("yes")
}

pub fn initial_diagnosis(input: &AssessmentInput) -> String {
    format!(
        "Initial assessment based on the reported symptoms ({symptoms}): musculoskeletal and \
         functional impairment consistent with the presentation of a {age}-year-old patient. \
         A full clinical examination is required to confirm the diagnosis.",
        symptoms = input.symptoms.trim(),
        age = input.age,
    )
}

pub fn prognosis(input: &AssessmentInput) -> String {
    let mobility = if input.walking == Mobility::Yes {
        "good"
    } else {
        "limited"
    };
    format!(
        "With consistent adherence to the rehabilitation program, {mobility} mobility outcomes \
         are expected, with a 60-80% likelihood of meaningful functional improvement over \
         12 weeks."
    )
}

pub fn rehab_plan(input: &AssessmentInput) -> String {
    format!(
        "Phase 1 (weeks 1-4): pain management, gentle range-of-motion exercises, and postural \
         training.\n\
         Phase 2 (weeks 5-8): progressive strengthening and endurance work, adapted to the \
         demands of the patient's work as {job}.\n\
         Phase 3 (weeks 9-12): functional reconditioning, balance training, and gradual return \
         to daily activities.",
        job = input.job.trim(),
    )
}

pub fn precautions(input: &AssessmentInput) -> String {
    let mut lines = String::from(
        "- Stop any exercise that causes sharp or radiating pain.\n\
         - Avoid heavy lifting and sudden twisting movements.\n\
         - Maintain hydration and adequate rest between sessions.",
    );
    if is_affirmative(&input.medications) {
        lines.push_str("\n- Coordinate exercise timing with the current medication schedule.");
    }
    if is_affirmative(&input.fractures) {
        lines.push_str(
            "\n- Avoid loading the previously fractured region until cleared by the treating \
             physician.",
        );
    }
    lines
}

pub fn medications_influence(input: &AssessmentInput) -> String {
    if is_affirmative(&input.medications) {
        MEDICATIONS_CAUTION.to_string()
    } else {
        NO_MEDICATIONS_IMPACT.to_string()
    }
}

pub fn fractures_influence(input: &AssessmentInput) -> String {
    if is_affirmative(&input.fractures) {
        FRACTURES_CAUTION.to_string()
    } else {
        NO_FRACTURES_IMPACT.to_string()
    }
}

/// Input-independent review cadence.
pub fn review_appointments() -> String {
    "Review appointments: every 2 weeks for the first 4 weeks, then every 4 weeks until \
     week 12, with a final discharge assessment at week 12."
        .to_string()
}

/// Compose a complete plan from templated content alone.
pub fn fallback_plan(input: &AssessmentInput) -> RehabPlanOutput {
    RehabPlanOutput {
        initial_diagnosis: initial_diagnosis(input),
        prognosis: prognosis(input),
        rehab_plan: rehab_plan(input),
        precautions: precautions(input),
        medications_influence: medications_influence(input),
        fractures_influence: fractures_influence(input),
        review_appointments: review_appointments(),
    }
}
