//! Live departure board for the Irish Rail realtime API.
//!
//! A client library for the realtime API (stations, trains, train
//! movements and station data) plus a terminal dashboard that keeps the
//! board for one station up to date.

pub mod board;
pub mod dashboard;
pub mod realtime;
pub mod stations;
