use thiserror::Error;

use crate::db::RepositoryError;

/// Errors surfaced by the dashboard session.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The data source could not be reached or the query failed.
    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] RepositoryError),

    /// No dataset is installed yet, or the operation needs a non-empty one.
    #[error("No dataset loaded; refresh first")]
    NotLoaded,
}

pub type DashboardResult<T> = Result<T, DashboardError>;
