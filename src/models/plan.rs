use serde::{Deserialize, Serialize};

/// The seven output sections, in the wire order the model is asked to
/// produce them. These are the JSON keys of the model contract.
pub const PLAN_FIELDS: [&str; 7] = [
    "initialDiagnosis",
    "prognosis",
    "rehabPlan",
    "precautions",
    "medicationsInfluence",
    "fracturesInfluence",
    "reviewAppointments",
];

/// The structured result of one plan generation.
///
/// Every field is a plain, non-empty string — the pipeline coerces or
/// replaces anything the model returns in a different shape. Produced once
/// per request (from model output, fallback content, or a mix) and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RehabPlanOutput {
    pub initial_diagnosis: String,
    pub prognosis: String,
    pub rehab_plan: String,
    pub precautions: String,
    pub medications_influence: String,
    pub fractures_influence: String,
    pub review_appointments: String,
}

impl RehabPlanOutput {
    /// All seven sections in wire order.
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.initial_diagnosis,
            &self.prognosis,
            &self.rehab_plan,
            &self.precautions,
            &self.medications_influence,
            &self.fractures_influence,
            &self.review_appointments,
        ]
    }

    /// True when every section is non-empty after trimming.
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|f| !f.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RehabPlanOutput {
        RehabPlanOutput {
            initial_diagnosis: "diagnosis".into(),
            prognosis: "prognosis".into(),
            rehab_plan: "plan".into(),
            precautions: "precautions".into(),
            medications_influence: "meds".into(),
            fractures_influence: "fractures".into(),
            review_appointments: "reviews".into(),
        }
    }

    #[test]
    fn serializes_camel_case_keys() {
        let json = serde_json::to_string(&sample()).unwrap();
        for key in PLAN_FIELDS {
            assert!(json.contains(&format!("\"{key}\"")), "missing key {key}");
        }
    }

    #[test]
    fn complete_plan_reports_complete() {
        assert!(sample().is_complete());
    }

    #[test]
    fn whitespace_only_section_is_incomplete() {
        let mut plan = sample();
        plan.precautions = "   ".into();
        assert!(!plan.is_complete());
    }

    #[test]
    fn fields_returns_wire_order() {
        let plan = sample();
        let fields = plan.fields();
        assert_eq!(fields[0], "diagnosis");
        assert_eq!(fields[6], "reviews");
        assert_eq!(fields.len(), PLAN_FIELDS.len());
    }
}
