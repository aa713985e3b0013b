use std::env;

/// Process-wide configuration, read from the environment at request time.
///
/// Both values are required; an empty string is treated the same as an
/// unset variable.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_token: String,
    pub telegram_chat_id: String,
    /// Optional Bot API base URL override, for self-hosted Bot API servers.
    /// Defaults to the public `api.telegram.org` endpoint when unset.
    pub telegram_api_base: Option<String>,
}

/// Reports which required variables were present when loading failed.
/// Carries booleans only so it can be logged without exposing secrets.
#[derive(Debug, Clone, Copy)]
pub struct MissingConfig {
    pub has_token: bool,
    pub has_chat_id: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, MissingConfig> {
        let token = non_empty_var("TELEGRAM_TOKEN");
        let chat_id = non_empty_var("TELEGRAM_CHAT_ID");

        match (token, chat_id) {
            (Some(telegram_token), Some(telegram_chat_id)) => Ok(Self {
                telegram_token,
                telegram_chat_id,
                telegram_api_base: non_empty_var("TELEGRAM_API_BASE"),
            }),
            (token, chat_id) => Err(MissingConfig {
                has_token: token.is_some(),
                has_chat_id: chat_id.is_some(),
            }),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
