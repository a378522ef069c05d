//! Dashboard error types.

use std::io;

use crate::realtime::RealtimeError;
use crate::stations::LookupError;

/// Errors that stop the dashboard.
///
/// Failed refreshes while the dashboard is running are not errors; they
/// are logged and the previous rows stay on screen.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The terminal could not be switched to full-screen mode
    #[error("failed to initialize display: {0}")]
    DisplayInit(#[source] io::Error),

    /// Drawing to or reading from the terminal failed
    #[error("terminal error: {0}")]
    Terminal(#[source] io::Error),

    /// The HTTP client could not be built
    #[error("failed to set up API client: {0}")]
    ClientInit(#[source] RealtimeError),

    /// The station could not be resolved
    #[error("failed to look up station: {0}")]
    Lookup(#[from] LookupError),

    /// The initial fetch failed
    #[error("failed to fetch station data: {0}")]
    Realtime(#[from] RealtimeError),
}
