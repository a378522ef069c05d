//! Station lookup error types.

use crate::realtime::RealtimeError;

/// Errors that can occur when resolving a station from user input.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// No station name, alias or code matched
    #[error("no station matches {query:?}")]
    NotFound { query: String },

    /// Fetching the station list failed
    #[error(transparent)]
    Realtime(#[from] RealtimeError),
}
