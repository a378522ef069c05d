//! Realtime client error types.

/// Errors from the realtime HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum RealtimeError {
    /// No response arrived (connection failure or timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected XML document
    #[error("XML parse error: {message}")]
    Xml {
        message: String,
        /// Start of the offending body, for logging.
        body: Option<String>,
    },
}
