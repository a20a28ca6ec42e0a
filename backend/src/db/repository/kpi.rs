//! Read-only repository trait for the pre-aggregated flight KPI table.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::FlightKpiRecord;

/// The one query the dashboard issues. No parameters, no pagination.
pub const FLIGHT_KPIS_QUERY: &str = "SELECT window_start, origin_country, total_flights, \
     avg_velocity, on_ground FROM kpi.flight_kpis ORDER BY window_start DESC";

/// Repository trait for the KPI data source.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait KpiRepository: Send + Sync {
    /// Check if the backing store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Run [`FLIGHT_KPIS_QUERY`] and return every row, newest window first.
    ///
    /// # Returns
    /// * `Ok(Vec<FlightKpiRecord>)` - All rows; empty when the table is empty
    /// * `Err(RepositoryError)` - If the store is unreachable or the query fails
    async fn fetch_flight_kpis(&self) -> RepositoryResult<Vec<FlightKpiRecord>>;
}
