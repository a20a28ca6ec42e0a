//! # Flight KPI Dashboard Backend
//!
//! Serves an operator dashboard over a pre-aggregated flight KPI table:
//! headline metrics, flights over time, and flights by origin country, all
//! scoped by a country selection and a date range.
//!
//! ## Architecture
//!
//! - [`db`]: data source adapter (repository trait, Postgres and in-memory backends)
//! - [`models`]: records, filter criteria and dataset snapshots
//! - [`services`]: filter engine, aggregation views and the dashboard session
//! - [`routes`]: view payload types (KPI cards, chart buckets, filter options)
//! - [`api`]: flat re-export of every payload type
//! - [`http`]: axum REST API (feature `http-server`)

// RepositoryError carries an ErrorContext in every variant.
#![allow(clippy::result_large_err)]

pub mod api;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
