//! Data Transfer Objects for the HTTP API.
//!
//! Chart and table payloads are the serializable types from [`crate::api`];
//! this module adds the request parsing and response envelopes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use crate::api::{
    CountryBucket, DashboardNotice, DashboardView, FilterCriteria, FilterOptions,
    FlightKpiRecord, KpiSummary, MetricCard, RefreshReport, TimeBucket,
};
use crate::api::DateRange;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Data source connection status
    pub database: String,
}

/// Control-panel options and the criteria the dashboard starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltersResponse {
    /// `None` when the installed dataset is empty
    pub options: Option<FilterOptions>,
    pub default_criteria: Option<FilterCriteria>,
    pub current_criteria: Option<FilterCriteria>,
}

/// Query parameters of `GET /v1/dashboard`.
///
/// `countries` is a comma-separated list; present but empty means "no
/// country selected". Dates use `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub countries: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid '{}' date '{}': {}", field, value, e))
}

impl DashboardQuery {
    /// True when no filter parameter was supplied.
    pub fn is_empty(&self) -> bool {
        self.countries.is_none() && self.from.is_none() && self.to.is_none()
    }

    /// Overlay the supplied parameters on `defaults`.
    pub fn to_criteria(&self, defaults: &FilterCriteria) -> Result<FilterCriteria, String> {
        let mut criteria = defaults.clone();

        if let Some(countries) = &self.countries {
            criteria = criteria.with_countries(
                countries
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty()),
            );
        }

        let lower = match &self.from {
            Some(from) => parse_date("from", from)?,
            None => defaults.date_range.lower,
        };
        let upper = match &self.to {
            Some(to) => parse_date("to", to)?,
            None => defaults.date_range.upper,
        };

        Ok(criteria.with_date_range(DateRange::new(lower, upper)))
    }
}

/// Display-ready dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// KPI tiles in display order
    pub cards: Vec<MetricCard>,
    pub summary: KpiSummary,
    pub flights_over_time: Vec<TimeBucket>,
    pub flights_by_country: Vec<CountryBucket>,
    pub records: Vec<FlightKpiRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<DashboardNotice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_message: Option<String>,
    /// Criteria the payload was computed with
    pub criteria: Option<FilterCriteria>,
    /// Refresh that installed the rows behind this payload
    pub refresh_id: Uuid,
}

impl From<DashboardView> for DashboardResponse {
    fn from(view: DashboardView) -> Self {
        let DashboardView {
            data,
            criteria,
            refresh_id,
        } = view;
        Self {
            cards: data.metric_cards(),
            notice_message: data.notice.map(|n| n.message().to_string()),
            notice: data.notice,
            summary: data.summary,
            flights_over_time: data.flights_over_time,
            flights_by_country: data.flights_by_country,
            records: data.records,
            criteria,
            refresh_id,
        }
    }
}
