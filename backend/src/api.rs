//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types served to the front-end. The
//! payload types derive Serialize/Deserialize; [`DatasetSnapshot`] is
//! re-exported for session consumers and is never serialized.

pub use crate::models::{DatasetSnapshot, DateRange, FilterCriteria, FlightKpiRecord};
pub use crate::routes::countries::CountryBucket;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::dashboard::DashboardNotice;
pub use crate::routes::filters::FilterOptions;
pub use crate::routes::kpis::KpiSummary;
pub use crate::routes::kpis::MetricCard;
pub use crate::routes::trends::TimeBucket;
pub use crate::services::session::{DashboardView, RefreshOutcome, RefreshReport};
