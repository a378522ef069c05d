//! Periodically refreshed departure board in the terminal.
//!
//! The loop logic lives in [`Dashboard`] and draws through the [`Surface`]
//! trait, so it can be driven without a terminal. [`run`] wires it to the
//! real terminal, a one-second timer and keyboard/resize events.

mod error;
mod state;
mod terminal;

pub use error::DashboardError;
pub use state::{
    Dashboard, DashboardConfig, LoopState, REFRESH_EVERY_TICKS, Signal, Surface, TickOutcome,
};
pub use terminal::{TerminalSurface, run, signal_for};
