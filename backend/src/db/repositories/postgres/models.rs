use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Text, Timestamp};

use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::models::FlightKpiRecord;

/// Raw row of `kpi.flight_kpis` as returned by the fixed query.
#[derive(Debug, Clone, QueryableByName)]
pub struct FlightKpiRow {
    #[diesel(sql_type = Timestamp)]
    pub window_start: NaiveDateTime,
    #[diesel(sql_type = Text)]
    pub origin_country: String,
    #[diesel(sql_type = BigInt)]
    pub total_flights: i64,
    #[diesel(sql_type = Double)]
    pub avg_velocity: f64,
    #[diesel(sql_type = BigInt)]
    pub on_ground: i64,
}

fn non_negative(value: i64, column: &str, row: &FlightKpiRow) -> RepositoryResult<u64> {
    u64::try_from(value).map_err(|_| {
        RepositoryError::validation(
            format!("{} must be non-negative, got {}", column, value),
            ErrorContext::new("decode_flight_kpi_row")
                .with_entity("flight_kpis")
                .with_details(format!(
                    "window_start={}, origin_country={}",
                    row.window_start, row.origin_country
                )),
        )
    })
}

impl TryFrom<FlightKpiRow> for FlightKpiRecord {
    type Error = RepositoryError;

    fn try_from(row: FlightKpiRow) -> RepositoryResult<Self> {
        let total_flights = non_negative(row.total_flights, "total_flights", &row)?;
        let on_ground = non_negative(row.on_ground, "on_ground", &row)?;
        Ok(FlightKpiRecord {
            window_start: row.window_start,
            origin_country: row.origin_country,
            total_flights,
            avg_velocity: row.avg_velocity,
            on_ground,
        })
    }
}
