//! Web Application State
//!
//! Shared state for the web API: the roster behind a single lock, the loaded
//! configuration, and the process start time for uptime reporting.
//!
//! Register/unregister take the write lock, so each mutation is a critical
//! section and the roster invariants hold under concurrent requests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::config::ActivitiesConfig;
use crate::roster::Roster;

/// Shared state for the activities web application.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RwLock<Roster>>,
    pub config: Arc<ActivitiesConfig>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// State with the seeded activity catalog.
    pub fn new(config: ActivitiesConfig) -> Self {
        let roster = Roster::seeded(config.roster.enforce_capacity);
        Self::with_roster(config, roster)
    }

    /// State with an explicit roster. Used by tests that need a custom
    /// catalog.
    pub fn with_roster(config: ActivitiesConfig, roster: Roster) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
