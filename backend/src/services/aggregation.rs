//! Aggregation views computed from a filtered dataset.
//!
//! Every function recomputes from scratch and does not depend on the order
//! of its input.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::api::{
    CountryBucket, DashboardData, DashboardNotice, FlightKpiRecord, KpiSummary, TimeBucket,
};

/// Sums of the count columns and the arithmetic mean of `avg_velocity`.
pub fn kpi_summary(records: &[FlightKpiRecord]) -> KpiSummary {
    if records.is_empty() {
        return KpiSummary::empty();
    }

    let total_flights_sum = records.iter().map(|r| u128::from(r.total_flights)).sum();
    let on_ground_sum = records.iter().map(|r| u128::from(r.on_ground)).sum();
    let velocity_sum: f64 = records.iter().map(|r| r.avg_velocity).sum();

    KpiSummary {
        total_flights_sum,
        avg_velocity_mean: Some(velocity_sum / records.len() as f64),
        on_ground_sum,
        record_count: records.len(),
    }
}

/// Total flights per exact `window_start`, ascending by timestamp.
pub fn time_series_view(records: &[FlightKpiRecord]) -> Vec<TimeBucket> {
    let mut buckets: BTreeMap<NaiveDateTime, u128> = BTreeMap::new();
    for record in records {
        *buckets.entry(record.window_start).or_insert(0) += u128::from(record.total_flights);
    }

    buckets
        .into_iter()
        .map(|(window_start, total_flights)| TimeBucket {
            window_start,
            total_flights,
        })
        .collect()
}

/// Total flights per origin country, ascending by country label.
pub fn category_view(records: &[FlightKpiRecord]) -> Vec<CountryBucket> {
    let mut buckets: BTreeMap<&str, u128> = BTreeMap::new();
    for record in records {
        *buckets.entry(record.origin_country.as_str()).or_insert(0) +=
            u128::from(record.total_flights);
    }

    buckets
        .into_iter()
        .map(|(country, total_flights)| CountryBucket {
            origin_country: country.to_string(),
            total_flights,
        })
        .collect()
}

/// Assemble every view for an already-filtered dataset.
///
/// An empty input yields well-defined empty views with a
/// [`DashboardNotice::NoMatchingRecords`] notice.
pub fn compute_dashboard_data(filtered: Vec<FlightKpiRecord>) -> DashboardData {
    if filtered.is_empty() {
        return DashboardData::empty(DashboardNotice::NoMatchingRecords);
    }

    DashboardData {
        summary: kpi_summary(&filtered),
        flights_over_time: time_series_view(&filtered),
        flights_by_country: category_view(&filtered),
        records: filtered,
        notice: None,
    }
}

#[cfg(test)]
#[path = "aggregation_tests.rs"]
mod aggregation_tests;
