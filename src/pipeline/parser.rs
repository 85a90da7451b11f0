use serde_json::{Map, Value};

use super::PlanError;

/// Parse the model's response into a raw field map.
///
/// Accepts either a fenced ```json block (models often wrap their output in
/// one despite instructions) or a bare JSON object. Field-level shape
/// problems are not handled here — `coerce_text` deals with those — this
/// only fails when no JSON object can be recovered at all, in which case
/// the orchestrator falls back wholesale.
pub fn parse_plan_response(response: &str) -> Result<Map<String, Value>, PlanError> {
    let json_str = extract_json_block(response)?;

    let value: Value = serde_json::from_str(&json_str)
        .map_err(|e| PlanError::JsonParsing(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(PlanError::MalformedResponse(format!(
            "Expected a JSON object, got {}",
            type_name(&other)
        ))),
    }
}

/// Extract the JSON payload from the response text.
fn extract_json_block(response: &str) -> Result<String, PlanError> {
    if let Some(json_start) = response.find("```json") {
        let content_start = json_start + 7;
        let json_end = response[content_start..]
            .find("```")
            .ok_or_else(|| PlanError::MalformedResponse("Unclosed JSON block".into()))?;
        return Ok(response[content_start..content_start + json_end]
            .trim()
            .to_string());
    }

    // No fence — take from the first '{' to the last '}' so leading chatter
    // ("Here is the plan:") does not break parsing.
    let start = response
        .find('{')
        .ok_or_else(|| PlanError::MalformedResponse("No JSON object found".into()))?;
    let end = response
        .rfind('}')
        .ok_or_else(|| PlanError::MalformedResponse("No JSON object found".into()))?;
    if end < start {
        return Err(PlanError::MalformedResponse("No JSON object found".into()));
    }
    Ok(response[start..=end].to_string())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_json_block() {
        let response = "Here is the plan:\n```json\n{\"prognosis\": \"good\"}\n```\nDone.";
        let map = parse_plan_response(response).unwrap();
        assert_eq!(map.get("prognosis").unwrap(), "good");
    }

    #[test]
    fn parses_bare_json_object() {
        let map = parse_plan_response("{\"prognosis\": \"good\"}").unwrap();
        assert_eq!(map.get("prognosis").unwrap(), "good");
    }

    #[test]
    fn parses_object_with_leading_chatter() {
        let response = "Sure! {\"prognosis\": \"good\"} hope that helps";
        let map = parse_plan_response(response).unwrap();
        assert_eq!(map.get("prognosis").unwrap(), "good");
    }

    #[test]
    fn unclosed_fence_is_malformed() {
        let result = parse_plan_response("```json\n{\"a\": 1}");
        assert!(matches!(result, Err(PlanError::MalformedResponse(_))));
    }

    #[test]
    fn prose_without_json_is_malformed() {
        let result = parse_plan_response("I cannot produce a plan for this patient.");
        assert!(matches!(result, Err(PlanError::MalformedResponse(_))));
    }

    #[test]
    fn broken_json_is_a_parse_error() {
        let result = parse_plan_response("{\"prognosis\": ");
        assert!(matches!(result, Err(PlanError::MalformedResponse(_))));

        let result = parse_plan_response("```json\n{broken\n```");
        assert!(matches!(result, Err(PlanError::JsonParsing(_))));
    }

    #[test]
    fn top_level_array_is_malformed() {
        let result = parse_plan_response("```json\n[1, 2, 3]\n```");
        match result {
            Err(PlanError::MalformedResponse(msg)) => assert!(msg.contains("array")),
            other => panic!("Expected MalformedResponse, got: {other:?}"),
        }
    }
}
