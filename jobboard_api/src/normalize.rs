//! Failure-payload normalization.
//!
//! The backend reports failures in several shapes: a validation error list
//! (`{"errors": [{"msg": ...}, ...]}`), a single `message` field, or a
//! single `error` field. This module flattens all of them into one
//! user-facing string by running an ordered chain of extractors; the first
//! extractor that matches wins, and anything unrecognized falls back to a
//! generic message.

use serde_json::Value;

/// Fallback shown when a failure carries no recognizable payload
/// (transport errors, empty bodies, unexpected shapes).
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

type Extractor = fn(&Value) -> Option<String>;

/// Extractors in priority order. Validation lists beat single-message
/// fields, and `message` beats the alternate `error` key.
const EXTRACTORS: &[Extractor] = &[validation_list, message_field, error_field];

/// Normalizes a failure payload into a single user-facing message.
///
/// `payload` is the parsed JSON body of the failed response, or `None` when
/// no body was received or it was not valid JSON.
pub fn normalize_failure(payload: Option<&Value>) -> String {
    payload
        .and_then(|v| EXTRACTORS.iter().find_map(|extract| extract(v)))
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

/// `{"errors": [{"msg": "..."}, ...]}`: joins the per-field messages
/// with `", "`. Entries without a string `msg` are skipped; an array with
/// no usable entries does not match.
fn validation_list(payload: &Value) -> Option<String> {
    let errors = payload.get("errors")?.as_array()?;
    let messages: Vec<&str> = errors
        .iter()
        .filter_map(|e| e.get("msg").and_then(Value::as_str))
        .collect();
    if messages.is_empty() {
        return None;
    }
    Some(messages.join(", "))
}

/// `{"message": "..."}`, used verbatim.
fn message_field(payload: &Value) -> Option<String> {
    payload
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// `{"error": "..."}`, the alternate single-message key, used verbatim.
fn error_field(payload: &Value) -> Option<String> {
    payload
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_list_joins_messages() {
        let payload = json!({
            "errors": [
                {"msg": "Email required"},
                {"msg": "Password too short"},
            ]
        });
        assert_eq!(
            normalize_failure(Some(&payload)),
            "Email required, Password too short"
        );
    }

    #[test]
    fn single_entry_validation_list() {
        let payload = json!({"errors": [{"msg": "Title required"}]});
        assert_eq!(normalize_failure(Some(&payload)), "Title required");
    }

    #[test]
    fn message_field_passed_through() {
        let payload = json!({"message": "Invalid credentials"});
        assert_eq!(normalize_failure(Some(&payload)), "Invalid credentials");
    }

    #[test]
    fn error_field_passed_through() {
        let payload = json!({"error": "Server busy"});
        assert_eq!(normalize_failure(Some(&payload)), "Server busy");
    }

    #[test]
    fn validation_list_beats_message_field() {
        let payload = json!({
            "errors": [{"msg": "Email required"}],
            "message": "Validation failed",
        });
        assert_eq!(normalize_failure(Some(&payload)), "Email required");
    }

    #[test]
    fn message_beats_error_field() {
        let payload = json!({"message": "Not found", "error": "ignored"});
        assert_eq!(normalize_failure(Some(&payload)), "Not found");
    }

    #[test]
    fn empty_validation_list_falls_through_to_message() {
        let payload = json!({"errors": [], "message": "Bad request"});
        assert_eq!(normalize_failure(Some(&payload)), "Bad request");
    }

    #[test]
    fn entries_without_msg_are_skipped() {
        let payload = json!({"errors": [{"param": "email"}, {"msg": "Email required"}]});
        assert_eq!(normalize_failure(Some(&payload)), "Email required");
    }

    #[test]
    fn unrecognized_shape_uses_generic_message() {
        let payload = json!({"status": "failed"});
        assert_eq!(normalize_failure(Some(&payload)), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn missing_payload_uses_generic_message() {
        assert_eq!(normalize_failure(None), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn non_string_message_is_ignored() {
        let payload = json!({"message": 42});
        assert_eq!(normalize_failure(Some(&payload)), GENERIC_FAILURE_MESSAGE);
    }
}
