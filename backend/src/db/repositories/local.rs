//! In-memory local repository implementation.
//!
//! Holds the KPI table as a plain `Vec`, suitable for unit testing and local
//! development. Rows come back ordered like [`FLIGHT_KPIS_QUERY`] orders them.
//!
//! [`FLIGHT_KPIS_QUERY`]: crate::db::repository::FLIGHT_KPIS_QUERY

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use crate::db::repository::{ErrorContext, KpiRepository, RepositoryError, RepositoryResult};
use crate::models::FlightKpiRecord;

/// In-memory local repository.
///
/// Clones share the same table, so a test can keep a handle and reseed
/// rows while a session owns another.
///
/// # Example
/// ```
/// use flight_kpi::db::repositories::LocalRepository;
/// use flight_kpi::db::repository::KpiRepository;
///
/// # async fn example() {
/// let repo = LocalRepository::new();
/// assert!(repo.fetch_flight_kpis().await.unwrap().is_empty());
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    rows: Vec<FlightKpiRecord>,
    is_healthy: bool,
    /// Artificial latency applied to fetches started while it is set.
    fetch_delay: Option<Duration>,
    fetch_count: usize,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            is_healthy: true,
            fetch_delay: None,
            fetch_count: 0,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository pre-populated with rows.
    pub fn with_records(records: Vec<FlightKpiRecord>) -> Self {
        let repo = Self::new();
        repo.replace_records(records);
        repo
    }

    /// Replace the whole table.
    pub fn replace_records(&self, records: Vec<FlightKpiRecord>) {
        self.data.write().rows = records;
    }

    /// Append rows to the table.
    pub fn insert_records(&self, records: impl IntoIterator<Item = FlightKpiRecord>) {
        self.data.write().rows.extend(records);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Delay subsequent fetches, for exercising overlapping refreshes.
    pub fn set_fetch_delay(&self, delay: Option<Duration>) {
        self.data.write().fetch_delay = delay;
    }

    /// Number of rows stored.
    pub fn record_count(&self) -> usize {
        self.data.read().rows.len()
    }

    /// Number of fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.data.read().fetch_count
    }

    /// Clear all rows, keeping the health flag.
    pub fn clear(&self) {
        let mut data = self.data.write();
        data.rows.clear();
        data.fetch_count = 0;
    }

    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection(
                "Database is not healthy",
                ErrorContext::new("fetch_flight_kpis").with_entity("flight_kpis"),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KpiRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn fetch_flight_kpis(&self) -> RepositoryResult<Vec<FlightKpiRecord>> {
        self.check_health()?;

        // The result reflects the table as it was when the query started.
        let (mut rows, delay) = {
            let mut data = self.data.write();
            data.fetch_count += 1;
            (data.rows.clone(), data.fetch_delay)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        // ORDER BY window_start DESC; stable, so ties keep insertion order.
        rows.sort_by(|a, b| b.window_start.cmp(&a.window_start));
        Ok(rows)
    }
}
