//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::KpiRepository;
use crate::services::DashboardSession;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single dashboard session served by this process
    pub session: Arc<DashboardSession>,
}

impl AppState {
    /// Create a new application state around an existing session.
    pub fn new(session: Arc<DashboardSession>) -> Self {
        Self { session }
    }

    /// Create a state with a fresh, not-yet-refreshed session.
    pub fn from_repository(repository: Arc<dyn KpiRepository>) -> Self {
        Self::new(Arc::new(DashboardSession::new(repository)))
    }

    pub fn repository(&self) -> &Arc<dyn KpiRepository> {
        self.session.repository()
    }
}
