use thiserror::Error;

/// Errors surfaced by API calls and capability checks.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The session token was rejected; it has been cleared and the user must
    /// log in again.
    #[error("unauthorized - please login again")]
    Unauthorized,

    /// The operation needs a capability the current session does not hold.
    /// Raised locally, before any request is sent.
    #[error("operation requires administrator rights")]
    Forbidden,

    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
