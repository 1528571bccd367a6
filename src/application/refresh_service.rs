// Refresh service - Owns the current dashboard state and runs ingestion cycles
use crate::application::normalizer::normalize;
use crate::application::sheet_source::SheetSource;
use crate::domain::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, watch};

/// The one message surfaced to consumers, whatever the underlying cause.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data from Google Sheets.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Fetching,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub phase: Phase,
    /// True until the first successful cycle.
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub snapshot: Option<Arc<Snapshot>>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            loading: true,
            error: None,
            last_updated: None,
            snapshot: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Normalized { rows: usize },
    Errored,
}

#[derive(Clone)]
pub struct RefreshService {
    source: Arc<dyn SheetSource>,
    state: Arc<watch::Sender<DashboardState>>,
    // Serializes cycles so snapshots land in trigger order
    cycle_lock: Arc<Mutex<()>>,
}

impl RefreshService {
    pub fn new(source: Arc<dyn SheetSource>) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        Self {
            source,
            state: Arc::new(state),
            cycle_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read-only view of the latest state.
    pub fn current(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    /// Run one fetch -> normalize cycle. A cycle already in flight finishes
    /// first; this one queues behind it.
    pub async fn refresh(&self) -> CycleOutcome {
        let _guard = self.cycle_lock.lock().await;
        self.run_cycle().await
    }

    /// Run a cycle only if none is in flight. Timer ticks use this so a slow
    /// source never builds a backlog of waiting cycles.
    pub async fn try_refresh(&self) -> Option<CycleOutcome> {
        let Ok(_guard) = self.cycle_lock.try_lock() else {
            tracing::debug!("refresh cycle already in flight, skipping tick");
            return None;
        };
        Some(self.run_cycle().await)
    }

    // Caller holds `cycle_lock`
    async fn run_cycle(&self) -> CycleOutcome {
        let start_time = Instant::now();

        self.state.send_modify(|s| s.phase = Phase::Fetching);

        match self.source.fetch_rows().await {
            Ok(rows) => {
                let snapshot = Arc::new(normalize(&rows));
                let count = snapshot.reading_count();

                self.state.send_modify(|s| {
                    s.phase = Phase::Idle;
                    s.loading = false;
                    s.error = None;
                    s.last_updated = Some(Utc::now());
                    s.snapshot = Some(snapshot);
                });

                tracing::info!(
                    rows = count,
                    elapsed_ms = start_time.elapsed().as_millis() as u64,
                    "snapshot refreshed"
                );
                CycleOutcome::Normalized { rows: count }
            }
            Err(e) => {
                tracing::error!(error = %e, "refresh cycle failed, keeping last snapshot");

                self.state.send_modify(|s| {
                    s.phase = Phase::Idle;
                    s.error = Some(FETCH_ERROR_MESSAGE.to_string());
                });
                CycleOutcome::Errored
            }
        }
    }
}
