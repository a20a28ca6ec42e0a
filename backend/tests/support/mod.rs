//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime};
use flight_kpi::api::FlightKpiRecord;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables overridden, restoring them afterwards.
///
/// Holds a process-wide lock for the duration so env-dependent tests do not
/// interleave. `Some(v)` sets a variable, `None` removes it.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::apply(changes);
    f()
}

/// Saved values of the overridden variables; put back on drop, also on unwind.
struct EnvRestore(Vec<(String, Option<String>)>);

impl EnvRestore {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let mut saved: Vec<(String, Option<String>)> = Vec::with_capacity(changes.len());
        for (key, value) in changes {
            if !saved.iter().any(|(k, _)| k == key) {
                saved.push((key.to_string(), std::env::var(key).ok()));
            }
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
        Self(saved)
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        // Restore in reverse so a key listed twice ends at its original value.
        for (key, value) in self.0.drain(..).rev() {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

pub fn record(
    window_start: NaiveDateTime,
    country: &str,
    total_flights: u64,
    avg_velocity: f64,
    on_ground: u64,
) -> FlightKpiRecord {
    FlightKpiRecord::new(window_start, country, total_flights, avg_velocity, on_ground)
}

/// Three days, three countries, with a shared window on the 2nd.
pub fn sample_records() -> Vec<FlightKpiRecord> {
    vec![
        record(at(2024, 1, 3, 0, 0), "US", 120, 510.5, 12),
        record(at(2024, 1, 2, 12, 0), "FR", 40, 470.0, 4),
        record(at(2024, 1, 2, 12, 0), "US", 100, 505.0, 9),
        record(at(2024, 1, 2, 0, 0), "DE", 60, 480.25, 6),
        record(at(2024, 1, 1, 6, 30), "FR", 35, 465.0, 3),
        record(at(2024, 1, 1, 0, 0), "US", 90, 500.0, 8),
    ]
}
