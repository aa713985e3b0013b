//! Event extraction helpers for the Lambda proxy payload.

use serde_json::Value;

use crate::errors::NotifierError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Extracts the HTTP method from either API Gateway event shape
/// (`httpMethod` for REST, `requestContext.http.method` for HTTP v2).
pub fn extract_method(event: &Value) -> Option<&str> {
    event
        .get("httpMethod")
        .and_then(Value::as_str)
        .or_else(|| v_str(event, &["requestContext", "http", "method"]))
}

/// Resolves the event's `body` field into the event payload.
///
/// A string body is parsed as JSON, with an empty string standing in for
/// `{}`. A structured body is accepted as-is with no further validation.
/// An absent or null body yields an empty object.
///
/// # Errors
///
/// Returns `NotifierError::ParseError` if a string body is not valid JSON.
pub fn extract_payload(event: &Value) -> Result<Value, NotifierError> {
    match event.get("body") {
        None | Some(Value::Null) => Ok(Value::Object(serde_json::Map::new())),
        Some(Value::String(raw)) => {
            let raw = if raw.is_empty() { "{}" } else { raw.as_str() };
            serde_json::from_str(raw).map_err(|e| NotifierError::ParseError(e.to_string()))
        }
        Some(other) => Ok(other.clone()),
    }
}
