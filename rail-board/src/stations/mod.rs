//! Station resolution.
//!
//! Maps free text typed by the user ("connolly", "Dun Laoghaire", "TARA")
//! to exactly one station from the realtime API's station list.

mod error;
mod names;

pub use error::LookupError;
pub use names::{lookup_station, matches, normalize};
