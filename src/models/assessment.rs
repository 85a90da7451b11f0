use serde::{Deserialize, Serialize};

use super::enums::{Gender, Mobility, Support};

/// One patient's intake data for a single plan-generation request.
///
/// Produced by the intake form (external to this crate), consumed read-only
/// by the pipeline. Field names are camelCase on the wire; enum values are
/// kebab-case. `medications` and `fractures` are free text following the
/// form's `"no"` / `"yes - <details>"` convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub job: String,
    pub symptoms: String,
    pub age: u32,
    pub gender: Gender,
    pub neck_control: Support,
    pub trunk_control: Support,
    pub standing: Mobility,
    pub walking: Mobility,
    pub medications: String,
    pub fractures: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_intake_form_json() {
        let json = r#"{
            "job": "engineer",
            "symptoms": "neck and back pain, difficulty sitting",
            "age": 35,
            "gender": "male",
            "neckControl": "partially",
            "trunkControl": "yes",
            "standing": "yes",
            "walking": "with-assistance",
            "medications": "yes - acetaminophen",
            "fractures": "no"
        }"#;

        let input: AssessmentInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.job, "engineer");
        assert_eq!(input.age, 35);
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.neck_control, Support::Partially);
        assert_eq!(input.walking, Mobility::WithAssistance);
    }

    #[test]
    fn serializes_camel_case_field_names() {
        let input = AssessmentInput {
            job: "teacher".into(),
            symptoms: "knee pain".into(),
            age: 50,
            gender: Gender::Female,
            neck_control: Support::Yes,
            trunk_control: Support::Yes,
            standing: Mobility::Yes,
            walking: Mobility::Yes,
            medications: "no".into(),
            fractures: "no".into(),
        };

        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"neckControl\""));
        assert!(json.contains("\"trunkControl\""));
        assert!(!json.contains("neck_control"));
    }

    #[test]
    fn rejects_missing_required_field() {
        let json = r#"{"job": "engineer", "symptoms": "pain"}"#;
        let result: Result<AssessmentInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
