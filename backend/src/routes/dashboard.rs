use serde::{Deserialize, Serialize};

use super::countries::CountryBucket;
use super::kpis::{KpiSummary, MetricCard};
use super::trends::TimeBucket;
use crate::models::FlightKpiRecord;

/// Informational notices shown above the dashboard. Neither is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardNotice {
    /// The fetch succeeded but the KPI table has no rows.
    EmptyResult,
    /// The current criteria exclude every record.
    NoMatchingRecords,
}

impl DashboardNotice {
    pub fn message(&self) -> &'static str {
        match self {
            DashboardNotice::EmptyResult => "No data found in FLIGHT_KPIS table.",
            DashboardNotice::NoMatchingRecords => "No records match the current filters.",
        }
    }
}

/// Everything the dashboard renders for one set of criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: KpiSummary,
    pub flights_over_time: Vec<TimeBucket>,
    pub flights_by_country: Vec<CountryBucket>,
    /// The filtered rows for the raw data table, in fetch order.
    pub records: Vec<FlightKpiRecord>,
    pub notice: Option<DashboardNotice>,
}

impl DashboardData {
    /// Well-defined empty views carrying the given notice.
    pub fn empty(notice: DashboardNotice) -> Self {
        Self {
            summary: KpiSummary::empty(),
            flights_over_time: vec![],
            flights_by_country: vec![],
            records: vec![],
            notice: Some(notice),
        }
    }

    pub fn metric_cards(&self) -> Vec<MetricCard> {
        self.summary.metric_cards()
    }
}
