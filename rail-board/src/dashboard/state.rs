//! The refresh loop, independent of any real terminal.
//!
//! The dashboard reacts to three signals: a one-second tick, a terminal
//! resize and a quit key. Every tick redraws the "last update" title; every
//! twentieth tick also refetches the board. Fetches run to completion
//! before the next signal is handled.

use std::io;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::board::{BoardOrder, BoardRow, project_rows};
use crate::realtime::{RealtimeApi, Station};

use super::error::DashboardError;

/// Ticks between two full refreshes.
pub const REFRESH_EVERY_TICKS: u64 = 20;

/// Terminal lines not available to the table (title and margin).
const RESERVED_LINES: u16 = 3;

/// Something that can show the board: a terminal, or a recorder in tests.
pub trait Surface {
    /// Current (width, height) in cells.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Replace what is on screen with `title` above `rows`.
    fn draw(&mut self, title: &str, rows: &[BoardRow]) -> io::Result<()>;

    /// Wipe the screen before a redraw after a resize.
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Input to the refresh loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Tick,
    Resize { width: u16, height: u16 },
    Quit,
}

/// Where the refresh loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Initializing,
    Rendering,
    Waiting,
    Terminated,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Only the elapsed time in the title changed.
    Elapsed,
    /// Rows were refetched and the elapsed time reset.
    Refreshed,
    /// The refetch failed; the previous rows are still shown.
    RefreshFailed,
}

/// Configuration for the refresh loop.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Time between ticks.
    pub tick: Duration,

    /// Refetch on every n-th tick.
    pub refresh_every: u64,

    /// Ordering of trains within a direction.
    pub order: BoardOrder,
}

impl DashboardConfig {
    /// Set the ordering of trains within a direction.
    pub fn with_order(mut self, order: BoardOrder) -> Self {
        self.order = order;
        self
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            refresh_every: REFRESH_EVERY_TICKS,
            order: BoardOrder::Feed,
        }
    }
}

/// Live board for one station.
#[derive(Debug)]
pub struct Dashboard<C> {
    client: C,
    station: Station,
    config: DashboardConfig,
    state: LoopState,
    rows: Vec<BoardRow>,
    /// Ticks since start.
    ticks: u64,
    /// When the rows were last fetched successfully.
    last_update: Instant,
    /// Number of rows (header included) that fit on screen.
    capacity: usize,
}

impl<C: RealtimeApi> Dashboard<C> {
    /// Fetch the first board and draw it.
    ///
    /// A failure here is fatal; there is nothing to show yet.
    pub async fn start<S: Surface>(
        client: C,
        station: Station,
        config: DashboardConfig,
        surface: &mut S,
    ) -> Result<Self, DashboardError> {
        let mut dashboard = Self {
            client,
            station,
            config,
            state: LoopState::Initializing,
            rows: Vec::new(),
            ticks: 0,
            last_update: Instant::now(),
            capacity: 0,
        };

        dashboard.rows = dashboard.fetch_rows().await?;
        dashboard.last_update = Instant::now();
        let (_, height) = surface.size().map_err(DashboardError::Terminal)?;
        dashboard.capacity = capacity_for(height);
        dashboard.render(surface)?;

        info!(
            station = %dashboard.station.name,
            rows = dashboard.rows.len(),
            "dashboard started"
        );
        Ok(dashboard)
    }

    /// React to one signal, returning the state afterwards.
    pub async fn handle<S: Surface>(
        &mut self,
        signal: Signal,
        surface: &mut S,
    ) -> Result<LoopState, DashboardError> {
        match signal {
            Signal::Tick => {
                self.tick(surface).await?;
            }
            Signal::Resize { height, .. } => self.resize(height, surface)?,
            Signal::Quit => self.quit(),
        }
        Ok(self.state)
    }

    /// Advance the clock by one tick, refetching on every n-th tick.
    pub async fn tick<S: Surface>(
        &mut self,
        surface: &mut S,
    ) -> Result<TickOutcome, DashboardError> {
        self.ticks += 1;

        if self.ticks % self.config.refresh_every.max(1) != 0 {
            self.render(surface)?;
            return Ok(TickOutcome::Elapsed);
        }

        let outcome = match self.fetch_rows().await {
            Ok(rows) => {
                debug!(rows = rows.len(), "refreshed board");
                self.rows = rows;
                self.last_update = Instant::now();
                TickOutcome::Refreshed
            }
            Err(e) => {
                warn!(error = %e, "refresh failed, keeping previous board");
                TickOutcome::RefreshFailed
            }
        };

        self.render(surface)?;
        Ok(outcome)
    }

    /// Fit the table to a new terminal height and redraw without refetching.
    pub fn resize<S: Surface>(
        &mut self,
        height: u16,
        surface: &mut S,
    ) -> Result<(), DashboardError> {
        self.capacity = capacity_for(height);
        surface.clear().map_err(DashboardError::Terminal)?;
        self.render(surface)
    }

    /// Stop the loop.
    pub fn quit(&mut self) {
        info!("dashboard stopped");
        self.state = LoopState::Terminated;
    }

    async fn fetch_rows(&self) -> Result<Vec<BoardRow>, DashboardError> {
        let details = self.client.station_data_for(&self.station).await?;
        Ok(project_rows(&self.config.order.apply(details)))
    }

    fn render<S: Surface>(&mut self, surface: &mut S) -> Result<(), DashboardError> {
        self.state = LoopState::Rendering;
        surface
            .draw(&self.title(), self.visible_rows())
            .map_err(DashboardError::Terminal)?;
        self.state = LoopState::Waiting;
        Ok(())
    }
}

impl<C> Dashboard<C> {
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// All rows of the current board, header included.
    pub fn rows(&self) -> &[BoardRow] {
        &self.rows
    }

    /// The rows that fit on screen.
    pub fn visible_rows(&self) -> &[BoardRow] {
        &self.rows[..self.rows.len().min(self.capacity)]
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Wall-clock time since the rows were last fetched successfully.
    pub fn elapsed(&self) -> Duration {
        self.last_update.elapsed()
    }

    pub fn title(&self) -> String {
        format!(
            "{} (Last update: {} seconds ago)",
            self.station.name,
            self.elapsed().as_secs()
        )
    }
}

/// Table rows that fit in a terminal of the given height.
fn capacity_for(height: u16) -> usize {
    usize::from(height.saturating_sub(RESERVED_LINES))
}
