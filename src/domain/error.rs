use thiserror::Error;

/// Library-wide error type for lp-seed operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Non-success response from the components API.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Network-level failure before a usable response arrived.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),
}
