//! Projection of station data onto display rows.

use std::collections::BTreeSet;

use crate::realtime::TrainDetail;

/// Column titles, in display order.
pub const COLUMN_TITLES: [&str; 7] = [
    "Destination",
    "Due In",
    "Delay",
    "Arrival",
    "Origin",
    "Direction",
    "Status",
];

/// One line of the board.
///
/// The header and the blank separators between direction groups are rows
/// like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardRow {
    pub destination: String,
    pub due: String,
    pub delay: String,
    pub arrival: String,
    pub origin: String,
    pub direction: String,
    pub status: String,
}

impl BoardRow {
    /// The column titles as a row.
    pub fn header() -> Self {
        let [destination, due, delay, arrival, origin, direction, status] =
            COLUMN_TITLES.map(str::to_string);
        Self {
            destination,
            due,
            delay,
            arrival,
            origin,
            direction,
            status,
        }
    }

    /// An empty row, used between direction groups.
    pub fn separator() -> Self {
        Self::default()
    }

    /// The row for one train.
    pub fn for_train(detail: &TrainDetail) -> Self {
        Self {
            destination: detail.destination_name.clone(),
            due: due_string(detail.due_in_minutes),
            delay: delay_string(detail.late_by_minutes),
            arrival: detail.expected_arrival.clone(),
            origin: detail.origin_name.clone(),
            direction: detail.direction.clone(),
            status: detail.last_location.clone(),
        }
    }

    pub fn is_separator(&self) -> bool {
        self == &Self::separator()
    }

    /// Cell texts in column order.
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.destination,
            &self.due,
            &self.delay,
            &self.arrival,
            &self.origin,
            &self.direction,
            &self.status,
        ]
    }
}

/// Human-readable time until arrival.
pub fn due_string(due_in_minutes: i32) -> String {
    match due_in_minutes {
        n if n <= 0 => "Arriving".to_string(),
        1 => "1 min".to_string(),
        n => format!("{n} mins"),
    }
}

/// Human-readable deviation from schedule; empty when on time.
pub fn delay_string(late_by_minutes: i32) -> String {
    match late_by_minutes {
        0 => String::new(),
        1 => "1 min late".to_string(),
        -1 => "1 min early".to_string(),
        n if n > 1 => format!("{n} mins late"),
        n => format!("{} mins early", n.unsigned_abs()),
    }
}

/// Directions present in `details`, sorted ascending, without duplicates.
pub fn directions(details: &[TrainDetail]) -> Vec<&str> {
    details
        .iter()
        .map(|d| d.direction.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Lay out `details` as board rows.
///
/// The header comes first. Trains are then grouped by direction, groups in
/// ascending direction order, each group opened by a separator row. Within
/// a group trains keep the order they have in `details`.
pub fn project_rows(details: &[TrainDetail]) -> Vec<BoardRow> {
    let mut rows = vec![BoardRow::header()];

    for direction in directions(details) {
        rows.push(BoardRow::separator());
        rows.extend(
            details
                .iter()
                .filter(|d| d.direction == direction)
                .map(BoardRow::for_train),
        );
    }

    rows
}
