//! HTTP server module for the flight KPI dashboard.
//!
//! Exposes a [`DashboardSession`](crate::services::DashboardSession) as a
//! small JSON API:
//!
//! | Method | Path            | Purpose                                   |
//! |--------|-----------------|-------------------------------------------|
//! | GET    | `/health`       | liveness and data source status           |
//! | POST   | `/v1/refresh`   | re-fetch the KPI table                    |
//! | GET    | `/v1/filters`   | country list, date bounds, criteria       |
//! | GET    | `/v1/dashboard` | KPI cards, charts and rows for a filter   |

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
