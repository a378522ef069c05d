//! In-memory realtime client for testing without network access.
//!
//! Serves fixed records as if they were live API responses. Records are
//! passed through the same sanitizing as the HTTP client.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::client::RealtimeApi;
use super::error::RealtimeError;
use super::sanitize::sanitize_all;
use super::types::{Station, StationDetail, Train, TrainDetail};

#[derive(Debug, Default)]
struct MockData {
    stations: Vec<Station>,
    trains: Vec<Train>,
    /// Keyed by (train code, train date).
    movements: HashMap<(String, String), Vec<StationDetail>>,
    /// Keyed by station code.
    station_data: HashMap<String, Vec<TrainDetail>>,
    /// When set, every call fails as if the service were unreachable.
    offline: bool,
    /// Number of calls served, including failed ones.
    calls: usize,
}

/// Mock realtime client serving data held in memory.
///
/// Clones share the same data, so a test can keep a handle and change
/// what the code under test sees between calls.
#[derive(Debug, Clone, Default)]
pub struct MockRealtimeClient {
    data: Arc<RwLock<MockData>>,
}

impl MockRealtimeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stations(stations: Vec<Station>) -> Self {
        Self {
            data: Arc::new(RwLock::new(MockData {
                stations,
                ..Default::default()
            })),
        }
    }

    pub async fn set_stations(&self, stations: Vec<Station>) {
        self.data.write().await.stations = stations;
    }

    pub async fn set_trains(&self, trains: Vec<Train>) {
        self.data.write().await.trains = trains;
    }

    pub async fn set_movements(
        &self,
        train_code: &str,
        train_date: &str,
        movements: Vec<StationDetail>,
    ) {
        self.data
            .write()
            .await
            .movements
            .insert((train_code.to_string(), train_date.to_string()), movements);
    }

    pub async fn set_station_data(&self, station_code: &str, details: Vec<TrainDetail>) {
        self.data
            .write()
            .await
            .station_data
            .insert(station_code.to_string(), details);
    }

    /// Make every subsequent call fail (or succeed again).
    pub async fn set_offline(&self, offline: bool) {
        self.data.write().await.offline = offline;
    }

    /// Number of calls made so far.
    pub async fn calls(&self) -> usize {
        self.data.read().await.calls
    }

    /// Count the call and fail it if offline.
    async fn begin_call(&self) -> Result<(), RealtimeError> {
        let mut data = self.data.write().await;
        data.calls += 1;
        if data.offline {
            return Err(RealtimeError::Api {
                status: 503,
                message: "mock client is offline".to_string(),
            });
        }
        Ok(())
    }
}

impl RealtimeApi for MockRealtimeClient {
    async fn list_stations(&self) -> Result<Vec<Station>, RealtimeError> {
        self.begin_call().await?;
        Ok(sanitize_all(self.data.read().await.stations.clone()))
    }

    async fn list_trains(&self) -> Result<Vec<Train>, RealtimeError> {
        self.begin_call().await?;
        Ok(sanitize_all(self.data.read().await.trains.clone()))
    }

    async fn train_movements(
        &self,
        train_code: &str,
        train_date: &str,
    ) -> Result<Vec<StationDetail>, RealtimeError> {
        self.begin_call().await?;
        let data = self.data.read().await;
        let key = (train_code.to_string(), train_date.to_string());
        Ok(sanitize_all(data.movements.get(&key).cloned().unwrap_or_default()))
    }

    async fn station_data(&self, station_code: &str) -> Result<Vec<TrainDetail>, RealtimeError> {
        self.begin_call().await?;
        let data = self.data.read().await;
        Ok(sanitize_all(
            data.station_data.get(station_code).cloned().unwrap_or_default(),
        ))
    }
}
