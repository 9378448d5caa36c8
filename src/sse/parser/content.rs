//! Extraction of answer text from parsed payloads.

use serde_json::Value;

/// JSON pointer to the incremental text of a chat completion chunk
const CONTENT_POINTER: &str = "/choices/0/delta/content";

/// Pull the fragment out of a chunk payload.
///
/// Missing fields, non-string content and empty strings all yield `None`.
pub(super) fn extract_fragment(payload: &Value) -> Option<String> {
    payload
        .pointer(CONTENT_POINTER)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// The `error` member of a payload, when present and not null.
///
/// Only used for logging; such payloads still parse as ordinary frames.
pub(super) fn error_field(payload: &Value) -> Option<&Value> {
    payload.get("error").filter(|value| !value.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_fragment_present() {
        let payload = json!({"choices": [{"delta": {"content": "Hel"}}]});
        assert_eq!(extract_fragment(&payload), Some("Hel".to_string()));
    }

    #[test]
    fn test_extract_fragment_uses_first_choice_only() {
        let payload = json!({"choices": [
            {"delta": {"content": "first"}},
            {"delta": {"content": "second"}}
        ]});
        assert_eq!(extract_fragment(&payload), Some("first".to_string()));
    }

    #[test]
    fn test_extract_fragment_absent_is_none() {
        assert_eq!(extract_fragment(&json!({})), None);
        assert_eq!(extract_fragment(&json!({"choices": []})), None);
        assert_eq!(
            extract_fragment(&json!({"choices": [{"delta": {"role": "assistant"}}]})),
            None
        );
        assert_eq!(
            extract_fragment(&json!({"choices": [{"delta": {"content": null}}]})),
            None
        );
        assert_eq!(extract_fragment(&json!({"choices": "nope"})), None);
    }

    #[test]
    fn test_extract_fragment_empty_is_none() {
        let payload = json!({"choices": [{"delta": {"content": ""}}]});
        assert_eq!(extract_fragment(&payload), None);
    }

    #[test]
    fn test_error_field() {
        let payload = json!({"error": {"message": "rate limited"}});
        assert_eq!(error_field(&payload), Some(&json!({"message": "rate limited"})));
        assert_eq!(error_field(&json!({"error": false})), Some(&json!(false)));
        assert_eq!(error_field(&json!({"error": null})), None);
        assert_eq!(error_field(&json!({"choices": []})), None);
    }
}
