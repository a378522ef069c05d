//! Realtime API response records.
//!
//! These types map directly to the XML documents served by the realtime
//! API. Every field is defaulted because the service omits elements rather
//! than sending empty ones for some trains.

use serde::Deserialize;

/// A station from `getAllStationsXML`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Station {
    #[serde(rename = "StationCode")]
    pub code: String,

    #[serde(rename = "StationDesc")]
    pub name: String,

    /// Alternative name, often empty.
    #[serde(rename = "StationAlias")]
    pub alias: String,

    #[serde(rename = "StationLatitude")]
    pub latitude: f64,

    #[serde(rename = "StationLongitude")]
    pub longitude: f64,
}

/// A running (or about to run) train from `getCurrentTrainsXML`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Train {
    #[serde(rename = "TrainCode")]
    pub code: String,

    /// Date as sent by the service, e.g. "19 Oct 2026".
    #[serde(rename = "TrainDate")]
    pub date: String,

    #[serde(rename = "Direction")]
    pub direction: String,

    /// "R" (running), "N" (not yet running) or "T" (terminated).
    #[serde(rename = "TrainStatus")]
    pub status: String,

    /// Public message. Lines are separated by a literal `\n` upstream.
    #[serde(rename = "PublicMessage")]
    pub message: String,

    #[serde(rename = "TrainLatitude")]
    pub latitude: f64,

    #[serde(rename = "TrainLongitude")]
    pub longitude: f64,
}

/// One stop of a train's itinerary, from `getTrainMovementsXML`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StationDetail {
    #[serde(rename = "LocationCode")]
    pub station_code: String,

    #[serde(rename = "LocationFullName")]
    pub station_name: String,

    #[serde(rename = "LocationOrder")]
    pub order: i32,

    /// One of "S" (start), "T" (timing point), "O" (other) or "D"
    /// (destination). Cleared during sanitizing if anything else.
    #[serde(rename = "LocationType")]
    pub station_type: String,

    #[serde(rename = "TrainOrigin")]
    pub origin_name: String,

    #[serde(rename = "TrainDestination")]
    pub destination_name: String,

    #[serde(rename = "ScheduledArrival")]
    pub scheduled_arrival: String,

    #[serde(rename = "ScheduledDeparture")]
    pub scheduled_departure: String,

    #[serde(rename = "ExpectedArrival")]
    pub expected_arrival: String,

    #[serde(rename = "ExpectedDeparture")]
    pub expected_departure: String,

    #[serde(rename = "Arrival")]
    pub arrival: String,

    #[serde(rename = "Departure")]
    pub departure: String,

    /// "C" (current) or "N" (next). Cleared during sanitizing otherwise.
    #[serde(rename = "StopType")]
    pub stop_type: String,
}

/// A train as seen from one station, from `getStationDataByCodeXML`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrainDetail {
    #[serde(rename = "Traincode")]
    pub train_code: String,

    #[serde(rename = "Traindate")]
    pub train_date: String,

    #[serde(rename = "Status")]
    pub status: String,

    #[serde(rename = "Origin")]
    pub origin_name: String,

    #[serde(rename = "Origintime")]
    pub origin_time: String,

    #[serde(rename = "Destination")]
    pub destination_name: String,

    #[serde(rename = "Destinationtime")]
    pub destination_time: String,

    #[serde(rename = "Lastlocation")]
    pub last_location: String,

    /// Minutes until the train reaches this station. Zero or below means
    /// it is arriving now.
    #[serde(rename = "Duein")]
    pub due_in_minutes: i32,

    /// Positive when late, negative when early.
    #[serde(rename = "Late")]
    pub late_by_minutes: i32,

    #[serde(rename = "Exparrival")]
    pub expected_arrival: String,

    #[serde(rename = "Expdepart")]
    pub expected_departure: String,

    #[serde(rename = "Scharrival")]
    pub scheduled_arrival: String,

    #[serde(rename = "Schdepart")]
    pub scheduled_departure: String,

    #[serde(rename = "Direction")]
    pub direction: String,

    #[serde(rename = "Traintype")]
    pub train_type: String,

    #[serde(rename = "Locationtype")]
    pub location_type: String,
}

/// `<ArrayOfObjStation>` document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StationList {
    #[serde(rename = "objStation", default)]
    pub stations: Vec<Station>,
}

/// `<ArrayOfObjTrainPositions>` document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TrainList {
    #[serde(rename = "objTrainPositions", default)]
    pub trains: Vec<Train>,
}

/// `<ArrayOfObjTrainMovements>` document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MovementList {
    #[serde(rename = "objTrainMovements", default)]
    pub movements: Vec<StationDetail>,
}

/// `<ArrayOfObjStationData>` document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StationDataList {
    #[serde(rename = "objStationData", default)]
    pub details: Vec<TrainDetail>,
}
