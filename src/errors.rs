use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Failed to parse request body: {0}")]
    ParseError(String),

    #[error("Missing configuration: {0}")]
    ConfigError(String),

    #[error("Telegram API rejected the message: {0}")]
    TelegramError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<serde_json::Error> for NotifierError {
    fn from(error: serde_json::Error) -> Self {
        NotifierError::ParseError(error.to_string())
    }
}

impl From<reqwest::Error> for NotifierError {
    fn from(error: reqwest::Error) -> Self {
        NotifierError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for NotifierError {
    fn from(error: anyhow::Error) -> Self {
        NotifierError::TelegramError(error.to_string())
    }
}
