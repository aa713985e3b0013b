//! Telegram Bot API client.
//!
//! Encapsulates the single outbound interaction this service performs:
//! one `sendMessage` call per accepted request, no retries.

use std::sync::LazyLock;

use reqwest::Client;
use serde::Serialize;

use crate::core::config::AppConfig;
use crate::errors::NotifierError;

// No request timeout is configured here; delivery relies on whatever the
// transport and the Lambda runtime enforce.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(Client::new);

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// JSON body for the Bot API `sendMessage` method. The rendering mode and
/// link-preview suppression are fixed delivery parameters.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'static str,
    pub disable_web_page_preview: bool,
}

impl<'a> SendMessageRequest<'a> {
    #[must_use]
    pub fn new(chat_id: &'a str, text: &'a str) -> Self {
        Self {
            chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        }
    }
}

/// Raw outcome of one `sendMessage` call. The handler decides how the
/// remote status maps onto its own response.
#[derive(Debug)]
pub struct SendOutcome {
    pub status: reqwest::StatusCode,
    pub body: String,
}

impl SendOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

pub struct TelegramClient {
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config
                .telegram_api_base
                .clone()
                .unwrap_or_else(|| TELEGRAM_API_BASE.to_string()),
            token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        }
    }

    /// Sends one message with HTML parse mode and link previews disabled.
    ///
    /// # Errors
    ///
    /// Returns `NotifierError::HttpError` if the request never completes
    /// (connection refused, DNS failure, timeout). A non-2xx response is
    /// not an error here; it is reported through the returned outcome.
    pub async fn send_message(&self, text: &str) -> Result<SendOutcome, NotifierError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let payload = SendMessageRequest::new(&self.chat_id, text);

        let resp = HTTP_CLIENT
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifierError::HttpError(format!("sendMessage request failed: {e}")))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            NotifierError::HttpError(format!("sendMessage response read failed: {e}"))
        })?;

        Ok(SendOutcome { status, body })
    }
}
