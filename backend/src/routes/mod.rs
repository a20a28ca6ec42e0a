//! Route-specific data types for the dashboard tabs.
//!
//! Each submodule owns the serializable DTOs of one dashboard panel.
//!
//! - [`kpis`]: the KPI row (three metric cards)
//! - [`trends`]: the "Flight Trends" tab (flights over time)
//! - [`countries`]: the "Country Analysis" tab (flights by origin country)
//! - [`filters`]: the control panel (country multiselect, date range picker)
//! - [`dashboard`]: the combined payload including the raw data table

pub mod countries;
pub mod dashboard;
pub mod filters;
pub mod kpis;
pub mod trends;
