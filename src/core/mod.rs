//! Core configuration shared across the handler.

pub mod config;

pub use config::AppConfig;
