use crate::models::AssessmentInput;

pub const PLAN_SYSTEM_PROMPT: &str = r#"
You are a physical-rehabilitation planning assistant. You draft a structured
12-week rehabilitation plan from a patient's intake assessment.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Base the plan ONLY on the assessment fields you are given.
2. NEVER invent patient history that is not stated in the assessment.
3. Output MUST be a single valid JSON object and nothing else.
4. The JSON object MUST contain exactly these seven keys:
   initialDiagnosis, prognosis, rehabPlan, precautions,
   medicationsInfluence, fracturesInfluence, reviewAppointments.
5. Every value MUST be a plain string. No nested objects, no arrays,
   no null values.
6. Keep clinical language clear enough for the patient to read.
"#;

/// Build the generation prompt for one assessment.
///
/// Pure and deterministic: identical input (whitespace included) yields an
/// identical prompt, which is what makes response caching sound.
pub fn build_plan_prompt(input: &AssessmentInput) -> String {
    format!(
        r#"<assessment>
Occupation: {job}
Symptoms: {symptoms}
Age: {age}
Gender: {gender}
Neck control: {neck}
Trunk control: {trunk}
Standing ability: {standing}
Walking ability: {walking}
Medications: {medications}
Fractures: {fractures}
</assessment>

Draft a 12-week rehabilitation plan for the patient above.

Return ONLY a JSON object with this exact shape, every value a string:

{{
  "initialDiagnosis": "string",
  "prognosis": "string",
  "rehabPlan": "string",
  "precautions": "string",
  "medicationsInfluence": "string",
  "fracturesInfluence": "string",
  "reviewAppointments": "string"
}}
"#,
        job = input.job,
        symptoms = input.symptoms,
        age = input.age,
        gender = input.gender.as_str(),
        neck = input.neck_control.as_str(),
        trunk = input.trunk_control.as_str(),
        standing = input.standing.as_str(),
        walking = input.walking.as_str(),
        medications = input.medications,
        fractures = input.fractures,
    )
}
