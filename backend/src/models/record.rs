use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One row of the pre-aggregated `KPI.FLIGHT_KPIS` table.
///
/// Records are immutable once fetched; every derived view is rebuilt from
/// the fetched sequence instead of patching rows in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightKpiRecord {
    /// Start of the upstream aggregation window this row summarizes.
    pub window_start: NaiveDateTime,
    pub origin_country: String,
    pub total_flights: u64,
    pub avg_velocity: f64,
    pub on_ground: u64,
}

impl FlightKpiRecord {
    pub fn new(
        window_start: NaiveDateTime,
        origin_country: impl Into<String>,
        total_flights: u64,
        avg_velocity: f64,
        on_ground: u64,
    ) -> Self {
        Self {
            window_start,
            origin_country: origin_country.into(),
            total_flights,
            avg_velocity,
            on_ground,
        }
    }

    /// Calendar date of the window start, used by date-range filtering.
    pub fn window_date(&self) -> NaiveDate {
        self.window_start.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_date_drops_time_of_day() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(23, 45, 0)
            .unwrap();
        let record = FlightKpiRecord::new(ts, "DE", 4, 512.5, 1);
        assert_eq!(record.window_date(), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn test_record_serializes_iso_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let record = FlightKpiRecord::new(ts, "US", 10, 500.0, 2);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["window_start"], "2024-01-01T00:00:00");
        assert_eq!(json["origin_country"], "US");
        assert_eq!(json["total_flights"], 10);
    }
}
