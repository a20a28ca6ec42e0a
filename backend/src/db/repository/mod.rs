//! Repository trait definitions for the KPI data source.
//!
//! - [`error`]: Error types for repository operations
//! - [`kpi`]: The read-only KPI table trait and its fixed query

pub mod error;
pub mod kpi;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use kpi::{KpiRepository, FLIGHT_KPIS_QUERY};
