use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum SidraError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The values endpoint returned a body that is not valid JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unsuccessful HTTP status code.
    ///
    /// The raw response body is kept as-is; the API puts its diagnostic message there.
    #[error("Unexpected response status: {status} at {url}: {body}")]
    Request {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The raw response body.
        body: String,
    },

    /// A table code was rejected before any request was made.
    #[error("Invalid table code: {0}")]
    Validation(String),

    /// The description page did not match the expected layout.
    #[error("Metadata parse error in state `{state}`: {reason} (line: {line:?})")]
    Parse {
        /// Parser state at the point of failure.
        state: &'static str,
        /// The offending line, after normalization and accent folding.
        line: String,
        /// What went wrong.
        reason: String,
    },
}

impl SidraError {
    pub(crate) fn parse(state: &'static str, line: &str, reason: impl Into<String>) -> Self {
        SidraError::Parse {
            state,
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}
