use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::assessment::AssessmentInput;
use super::plan::RehabPlanOutput;

/// A persisted generation result.
///
/// The pipeline never writes these itself — callers build one from a
/// returned plan and hand it to a `ReportStore`. `user_id` is an opaque
/// identity string used only to scope listings; the pipeline does not
/// interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedReport {
    pub report_id: Uuid,
    pub user_id: String,
    pub assessment: AssessmentInput,
    pub plan: RehabPlanOutput,
    pub generated_at: DateTime<Utc>,
}

impl SavedReport {
    /// Build a report for a freshly generated plan, stamped now.
    pub fn new(user_id: &str, assessment: AssessmentInput, plan: RehabPlanOutput) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            assessment,
            plan,
            generated_at: Utc::now(),
        }
    }
}
