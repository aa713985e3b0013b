//! Telegram Bot API integration: outbound client and message formatting.

pub mod client;
pub mod format;

pub use client::{SendOutcome, TelegramClient};
