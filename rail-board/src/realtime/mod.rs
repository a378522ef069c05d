//! Irish Rail realtime API client.
//!
//! This module provides an HTTP client for the public realtime API, which
//! serves station lists, train positions and per-station/per-train
//! schedules as XML.
//!
//! Key characteristics of the API:
//! - No authentication; every endpoint is a GET under one base URL
//! - Responses are an `ArrayOf...` root wrapping repeated records
//! - Times are opaque "HH:MM" strings and are passed through untouched
//! - Codes arrive padded with whitespace and are trimmed on decode

mod client;
mod error;
mod mock;
mod sanitize;
mod types;

pub use client::{RealtimeApi, RealtimeClient, RealtimeConfig};
pub use error::RealtimeError;
pub use mock::MockRealtimeClient;
pub use sanitize::{MESSAGE_SEPARATOR, Sanitize, sanitize_all};
pub use types::{Station, StationDetail, Train, TrainDetail};
