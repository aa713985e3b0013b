//! Login/OTP event notifier.
//!
//! A single-endpoint Lambda that accepts a JSON payload describing a login or
//! OTP event, formats it into an HTML message, and relays it to a Telegram
//! chat via the Bot API.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - reqwest for the outbound Telegram Bot API call
//! - Tokio for async runtime
//!
//! The handler is stateless: configuration is read from the environment on
//! each invocation, the payload lives only for the duration of one request,
//! and exactly one outbound call is made per accepted request.

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod telegram;

pub use errors::NotifierError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at binary startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
