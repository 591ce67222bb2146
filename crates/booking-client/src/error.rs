//! Error types for booking-client.

use thiserror::Error;

/// Errors that can occur when talking to the booking API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Application-level error carrying a message meant for the user.
    #[error("{0}")]
    Application(String),

    /// The request did not complete in time.
    #[error("Request timed out")]
    Timeout,

    /// Health check failed.
    #[error("Health check failed")]
    HealthCheckFailed,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Errors reported by an authentication provider.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The user closed or rejected the provider flow.
    #[error("sign-in cancelled")]
    Cancelled,

    /// The provider reported a failure.
    #[error("provider error: {0}")]
    Provider(String),
}
