//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! dashboard session.

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

use super::dto::{
    DashboardQuery, DashboardResponse, FiltersResponse, HealthResponse, RefreshReport,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Reports whether the service is up and the data source is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository().as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

/// POST /v1/refresh
///
/// Re-fetch the KPI table. Fails with 503 when the data source is unavailable.
pub async fn refresh(State(state): State<AppState>) -> HandlerResult<RefreshReport> {
    let report = state.session.refresh().await?;
    info!(
        refresh_id = %report.refresh_id,
        outcome = ?report.outcome,
        "refresh requested over HTTP"
    );
    Ok(Json(report))
}

/// GET /v1/filters
pub async fn get_filters(State(state): State<AppState>) -> HandlerResult<FiltersResponse> {
    let options = state.session.filter_options()?;
    Ok(Json(FiltersResponse {
        default_criteria: options.as_ref().map(|o| o.default_criteria()),
        options,
        current_criteria: state.session.criteria(),
    }))
}

/// GET /v1/dashboard
///
/// Without query parameters the session's current criteria are used.
/// Otherwise the supplied parameters are applied on top of the dataset's
/// default criteria, without changing the session's own selection. The
/// response names the refresh whose rows and defaults it was built from.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> HandlerResult<DashboardResponse> {
    let view = if query.is_empty() {
        state.session.current_view()?
    } else {
        state
            .session
            .view_from_defaults(|defaults| {
                query.to_criteria(defaults).map_err(AppError::BadRequest)
            })?
    };
    Ok(Json(DashboardResponse::from(view)))
}
