use thiserror::Error;

pub const VALIDATION_HINT: &str = "Add at least a few words before we can curate music.";
pub const DEFAULT_FAILURE_HINT: &str = "Unable to generate playlist. Please try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaylistError {
    #[error("empty mood entry")]
    Validation,
    #[error("playlist service responded with status {status}: {message}")]
    Request { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed playlist response: {0}")]
    MalformedResponse(String),
}

impl PlaylistError {
    /// Builds a `Request` error from a non-success response body, falling back to
    /// the default message when the body carries no usable `error` string.
    pub fn from_failure_body(status: u16, body: &str) -> Self {
        let message =
            error_message_from_body(body).unwrap_or_else(|| DEFAULT_FAILURE_HINT.to_string());
        Self::Request { status, message }
    }

    /// The single line shown to the user for this error.
    pub fn hint(&self) -> String {
        match self {
            Self::Validation => VALIDATION_HINT.to_string(),
            Self::Request { message, .. } => message.clone(),
            Self::Network(_) | Self::MalformedResponse(_) => DEFAULT_FAILURE_HINT.to_string(),
        }
    }
}

fn error_message_from_body(body: &str) -> Option<String> {
    let payload: serde_json::Value = serde_json::from_str(body).ok()?;
    payload
        .get("error")
        .and_then(|value| value.as_str())
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
