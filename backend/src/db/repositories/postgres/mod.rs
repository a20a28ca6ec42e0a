//! Postgres repository implementation using Diesel.
//!
//! Reads the pre-aggregated `kpi.flight_kpis` table with one fixed query.
//! The repository never writes and never retries: a failed fetch surfaces
//! to the caller as-is and the operator decides when to refresh again.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 4)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use std::time::Duration;
use tokio::task;
use tracing::debug;

use crate::db::repository::{
    ErrorContext, KpiRepository, RepositoryError, RepositoryResult, FLIGHT_KPIS_QUERY,
};
use crate::models::FlightKpiRecord;

mod models;

use models::FlightKpiRow;

type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 4,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl PostgresConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;
        let defaults = Self::default();

        Ok(Self {
            database_url,
            max_pool_size: env_or("PG_POOL_MAX", defaults.max_pool_size),
            min_pool_size: env_or("PG_POOL_MIN", defaults.min_pool_size),
            connection_timeout_sec: env_or("PG_CONN_TIMEOUT_SEC", defaults.connection_timeout_sec),
            idle_timeout_sec: env_or("PG_IDLE_TIMEOUT_SEC", defaults.idle_timeout_sec),
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Diesel-backed, read-only repository for Postgres.
///
/// The pool is the session's connection handle: it is acquired once when the
/// repository is built and released when the last clone is dropped.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Create a new repository with a connection pool.
    ///
    /// No connection is opened here; an unreachable server surfaces on the
    /// first fetch.
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true)
            .build_unchecked(manager);

        Ok(Self { pool })
    }

    /// Run a blocking Diesel operation on a pooled connection.
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection(
                    e.to_string(),
                    ErrorContext::new(operation).with_details("get_connection"),
                )
            })?;
            f(&mut conn).map_err(|e| e.with_operation(operation))
        })
        .await
        .map_err(|e| {
            RepositoryError::internal(
                format!("Task join error: {}", e),
                ErrorContext::new("spawn_blocking"),
            )
        })?
    }
}

#[async_trait]
impl KpiRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn("health_check", |conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map(|_| true)
                .map_err(RepositoryError::from)
        })
        .await
    }

    async fn fetch_flight_kpis(&self) -> RepositoryResult<Vec<FlightKpiRecord>> {
        let rows = self
            .with_conn("fetch_flight_kpis", |conn| {
                sql_query(FLIGHT_KPIS_QUERY)
                    .load::<FlightKpiRow>(conn)
                    .map_err(RepositoryError::from)
            })
            .await?;
        debug!(rows = rows.len(), "loaded flight KPI rows");

        rows.into_iter().map(FlightKpiRecord::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_url_uses_defaults() {
        let config = PostgresConfig::with_url("postgres://localhost/kpi");
        assert_eq!(config.database_url, "postgres://localhost/kpi");
        assert_eq!(config.max_pool_size, 4);
        assert_eq!(config.min_pool_size, 1);
    }
}
