//! Dashboard session: filter application and the current/previous record sets.
//!
//! Every call to [`DashboardSession::apply_filters`] takes a ticket. Results are
//! committed only while their ticket is the latest one issued, so a slow
//! response for old filters can never overwrite the state of newer ones.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::comparison::previous_period;
use crate::core::{FilterParams, Turno};
use crate::io::TurnoSource;

/// Load status of the current period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    /// Current-period fetch failed; derived views are suppressed.
    Failed(String),
}

/// Outcome of one filter application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Results were committed and the dashboard is ready.
    Ready,
    /// The current-period fetch failed and the error was committed.
    Failed,
    /// A newer application was issued first; results were discarded.
    Superseded,
}

/// Point-in-time copy of the session state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub filters: FilterParams,
    pub state: LoadState,
    pub current: Arc<Vec<Turno>>,
    pub previous: Option<Arc<Vec<Turno>>>,
    /// Previous-period fetch failed; comparisons are absent.
    pub comparison_warning: Option<String>,
}

impl DashboardSnapshot {
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }
}

#[derive(Debug)]
struct SessionState {
    latest_ticket: u64,
    snapshot: DashboardSnapshot,
}

/// Owns the dashboard state. Locks are never held across an await point.
#[derive(Debug)]
pub struct DashboardSession {
    state: Mutex<SessionState>,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardSession {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState {
                latest_ticket: 0,
                snapshot: DashboardSnapshot {
                    filters: FilterParams::default(),
                    state: LoadState::Idle,
                    current: Arc::new(Vec::new()),
                    previous: None,
                    comparison_warning: None,
                },
            }),
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.state.lock().snapshot.clone()
    }

    /// Issue a ticket and mark the session as loading `filters`.
    fn begin(&self, filters: &FilterParams) -> u64 {
        let mut state = self.state.lock();
        state.latest_ticket += 1;
        state.snapshot.filters = filters.clone();
        state.snapshot.state = LoadState::Loading;
        state.latest_ticket
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.state.lock().latest_ticket == ticket
    }

    /// Replace the snapshot if `ticket` is still the latest. Returns whether
    /// the commit happened.
    fn commit(&self, ticket: u64, snapshot: DashboardSnapshot) -> bool {
        let mut state = self.state.lock();
        if state.latest_ticket != ticket {
            return false;
        }
        state.snapshot = snapshot;
        true
    }

    /// Fetch the current period and, when the range is closed, the previous
    /// one, then commit both.
    ///
    /// A current-period failure commits the error and skips the previous
    /// fetch. A previous-period failure keeps the current data and records a
    /// comparison warning instead.
    pub async fn apply_filters<S>(&self, source: &S, filters: FilterParams) -> ApplyOutcome
    where
        S: TurnoSource + ?Sized,
    {
        let ticket = self.begin(&filters);
        let span = info_span!("apply_filters", ticket);
        self.run(ticket, source, filters).instrument(span).await
    }

    /// Reset every filter and reload.
    pub async fn clear_filters<S>(&self, source: &S) -> ApplyOutcome
    where
        S: TurnoSource + ?Sized,
    {
        self.apply_filters(source, FilterParams::default()).await
    }

    async fn run<S>(&self, ticket: u64, source: &S, filters: FilterParams) -> ApplyOutcome
    where
        S: TurnoSource + ?Sized,
    {
        let current = match source.fetch_turnos(&filters).await {
            Ok(records) => records,
            Err(e) => {
                let message = e.user_message();
                warn!("Current period fetch failed: {}", message);
                let failed = DashboardSnapshot {
                    filters,
                    state: LoadState::Failed(message),
                    current: Arc::new(Vec::new()),
                    previous: None,
                    comparison_warning: None,
                };
                return self.outcome(self.commit(ticket, failed), ApplyOutcome::Failed);
            }
        };
        debug!("Current period returned {} turnos", current.len());

        if !self.is_latest(ticket) {
            warn!("Discarding stale response for ticket {}", ticket);
            return ApplyOutcome::Superseded;
        }

        let mut previous = None;
        let mut comparison_warning = None;
        if let Some(previous_filters) = previous_period(&filters) {
            match source.fetch_turnos(&previous_filters).await {
                Ok(records) => {
                    debug!("Previous period returned {} turnos", records.len());
                    previous = Some(Arc::new(records));
                }
                Err(e) => {
                    let message = e.user_message();
                    warn!("Previous period fetch failed, comparisons disabled: {}", message);
                    comparison_warning = Some(message);
                }
            }
        }

        let ready = DashboardSnapshot {
            filters,
            state: LoadState::Ready,
            current: Arc::new(current),
            previous,
            comparison_warning,
        };
        self.outcome(self.commit(ticket, ready), ApplyOutcome::Ready)
    }

    fn outcome(&self, committed: bool, outcome: ApplyOutcome) -> ApplyOutcome {
        if committed {
            info!("Dashboard state updated: {:?}", outcome);
            outcome
        } else {
            warn!("Discarding stale response");
            ApplyOutcome::Superseded
        }
    }
}
