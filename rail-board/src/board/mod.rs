//! Departure board table.
//!
//! Turns the trains due at a station into display rows: a header, then one
//! group per direction with due and delay times spelled out.

mod rows;
mod sort;

pub use rows::{BoardRow, COLUMN_TITLES, delay_string, directions, due_string, project_rows};
pub use sort::{BoardOrder, sorted_by_key};
