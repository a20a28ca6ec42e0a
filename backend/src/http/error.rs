//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::DashboardError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Dashboard session error
    Dashboard(DashboardError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Dashboard(DashboardError::NotLoaded) => (
                StatusCode::CONFLICT,
                ApiError::new("NOT_LOADED", DashboardError::NotLoaded.to_string()),
            ),
            AppError::Dashboard(DashboardError::DataUnavailable(e)) => {
                warn!(error = %e, retryable = e.is_retryable(), "data source unavailable");
                let error = ApiError::new("DATA_UNAVAILABLE", "Flight KPI data is unavailable")
                    .with_details(e.to_string());
                (StatusCode::SERVICE_UNAVAILABLE, error)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        AppError::Dashboard(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ErrorContext, RepositoryError};

    #[test]
    fn test_status_mapping() {
        let not_loaded = AppError::from(DashboardError::NotLoaded).into_response();
        assert_eq!(not_loaded.status(), StatusCode::CONFLICT);

        let unavailable = AppError::from(DashboardError::DataUnavailable(
            RepositoryError::connection("refused", ErrorContext::new("fetch_flight_kpis")),
        ))
        .into_response();
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bad = AppError::BadRequest("bad date".into()).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    }
}
