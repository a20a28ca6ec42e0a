//! Data source adapter for the flight KPI table.
//!
//! Abstracts the single read the dashboard performs behind the
//! [`KpiRepository`] trait so the storage backend can be swapped.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  DashboardSession / HTTP handlers                       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  services.rs - snapshot construction, logging           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  KpiRepository trait (repository/)                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                │
//! ┌───▼───────────────┐     ┌──────────▼──────────────┐
//! │ Postgres (Diesel) │     │ Local (in-memory)       │
//! └───────────────────┘     └─────────────────────────┘
//! ```
//!
//! Repositories are created through [`RepositoryFactory`] or
//! [`RepositoryBuilder`] and handed to the session explicitly as an
//! `Arc<dyn KpiRepository>`; there is no process-wide instance.

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod checksum;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

// Postgres config is colocated with the repository implementation.
#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::PostgresConfig;
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    _private: (),
}

pub use checksum::calculate_records_checksum;
pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::PostgresRepository;
pub use repository::{
    ErrorContext, KpiRepository, RepositoryError, RepositoryResult, FLIGHT_KPIS_QUERY,
};
pub use services::{health_check, load_dataset};
