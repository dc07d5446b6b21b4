//! Errors surfaced by the AI solver relay.

/// Failure of a solver request.
///
/// Callers only ever see a human-readable message; the underlying cause
/// (network, HTTP status, malformed payload, missing key) is folded into it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    /// Create an error with the given message.
    ///
    /// An empty message is replaced with a generic one so the error is
    /// always displayable.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "AI request failed".to_string()
        } else {
            message
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The request URL is dropped from the message; it carries the API key.
impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            Self::new(format!("AI request timed out: {err}"))
        } else {
            Self::new(format!("AI request failed: {err}"))
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed AI response: {err}"))
    }
}
