//! Realtime API HTTP client.
//!
//! Every endpoint is a plain GET returning an XML document wrapping a list
//! of records. Records are sanitized before they are handed out.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::RealtimeError;
use super::sanitize::sanitize_all;
use super::types::{
    MovementList, Station, StationDataList, StationDetail, StationList, Train, TrainDetail,
    TrainList,
};

/// Base URL of the public realtime API.
const PRODUCTION_BASE_URL: &str = "http://api.irishrail.ie/realtime/realtime.asmx";

/// Base URL of a loopback server replaying saved responses.
const LOCAL_BASE_URL: &str = "http://127.0.0.1:8080";

/// How much of an unparseable body to keep for diagnostics.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the realtime client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealtimeConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Give up on a request after this many seconds.
    pub timeout_secs: u64,
}

impl RealtimeConfig {
    /// The live public API.
    pub fn production() -> Self {
        Self {
            base_url: PRODUCTION_BASE_URL.to_string(),
            timeout_secs: 5,
        }
    }

    /// A local server on the loopback interface, for offline use.
    pub fn local() -> Self {
        Self {
            base_url: LOCAL_BASE_URL.to_string(),
            timeout_secs: 1,
        }
    }

    /// Point the client at another server, such as a mock in tests.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the per-request timeout, in seconds.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self::production()
    }
}

/// Access to the realtime API.
///
/// Implemented by the HTTP client and by the in-memory fake used in tests.
/// All returned records have already been sanitized.
#[allow(async_fn_in_trait)]
pub trait RealtimeApi {
    /// Every station known to the service.
    async fn list_stations(&self) -> Result<Vec<Station>, RealtimeError>;

    /// Trains currently running or due to run shortly.
    async fn list_trains(&self) -> Result<Vec<Train>, RealtimeError>;

    /// The itinerary of one train on one date.
    async fn train_movements(
        &self,
        train_code: &str,
        train_date: &str,
    ) -> Result<Vec<StationDetail>, RealtimeError>;

    /// Trains due at a station in the next 90 minutes.
    async fn station_data(&self, station_code: &str) -> Result<Vec<TrainDetail>, RealtimeError>;

    /// The itinerary of a train from `list_trains`.
    async fn movements_for(&self, train: &Train) -> Result<Vec<StationDetail>, RealtimeError> {
        self.train_movements(&train.code, &train.date).await
    }

    /// Trains due at a station from `list_stations`.
    async fn station_data_for(&self, station: &Station) -> Result<Vec<TrainDetail>, RealtimeError> {
        self.station_data(&station.code).await
    }
}

/// Realtime API client over HTTP.
#[derive(Debug, Clone)]
pub struct RealtimeClient {
    http: reqwest::Client,
    base_url: String,
}

impl RealtimeClient {
    /// Build the HTTP client. Fails only if the TLS backend cannot start.
    pub fn new(config: RealtimeConfig) -> Result<Self, RealtimeError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `path` and decode the body as XML.
    async fn get_xml<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RealtimeError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RealtimeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        quick_xml::de::from_str(&body).map_err(|e| {
            debug!(path, error = %e, "undecodable response");
            RealtimeError::Xml {
                message: e.to_string(),
                body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
            }
        })
    }
}

impl RealtimeApi for RealtimeClient {
    async fn list_stations(&self) -> Result<Vec<Station>, RealtimeError> {
        let list: StationList = self.get_xml("getAllStationsXML", &[]).await?;
        debug!(count = list.stations.len(), "fetched stations");
        Ok(sanitize_all(list.stations))
    }

    async fn list_trains(&self) -> Result<Vec<Train>, RealtimeError> {
        let list: TrainList = self.get_xml("getCurrentTrainsXML", &[]).await?;
        debug!(count = list.trains.len(), "fetched trains");
        Ok(sanitize_all(list.trains))
    }

    async fn train_movements(
        &self,
        train_code: &str,
        train_date: &str,
    ) -> Result<Vec<StationDetail>, RealtimeError> {
        let list: MovementList = self
            .get_xml(
                "getTrainMovementsXML",
                &[("TrainId", train_code), ("TrainDate", train_date)],
            )
            .await?;
        debug!(train_code, count = list.movements.len(), "fetched train movements");
        Ok(sanitize_all(list.movements))
    }

    async fn station_data(&self, station_code: &str) -> Result<Vec<TrainDetail>, RealtimeError> {
        let list: StationDataList = self
            .get_xml("getStationDataByCodeXML", &[("StationCode", station_code)])
            .await?;
        debug!(station_code, count = list.details.len(), "fetched station data");
        Ok(sanitize_all(list.details))
    }
}
