//! Service layer for filtering, aggregation and session orchestration.
//!
//! The pure functions in [`filtering`] and [`aggregation`] are what the
//! [`session::DashboardSession`] runs on every change event; they can also be
//! called directly on any record slice.

pub mod aggregation;
pub mod error;
pub mod filtering;
pub mod session;

pub use aggregation::{category_view, compute_dashboard_data, kpi_summary, time_series_view};
pub use error::{DashboardError, DashboardResult};
pub use filtering::{apply, default_criteria, filter_options};
pub use session::{DashboardSession, DashboardView, RefreshOutcome, RefreshReport};
