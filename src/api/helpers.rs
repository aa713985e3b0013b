//! Response builders for the Lambda proxy contract.
//!
//! Every response this service emits is plain text; the success path passes
//! the Telegram API's raw response body through verbatim.

use serde_json::{Value, json};

/// Returns a 200 OK response with the given plain-text body.
#[must_use]
pub fn ok_response(body: &str) -> Value {
    json!({ "statusCode": 200, "body": body })
}

/// Returns an error response with the given status code and plain-text body.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({ "statusCode": status_code, "body": message })
}
