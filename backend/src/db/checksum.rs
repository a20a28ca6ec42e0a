//! Checksums for detecting an unchanged KPI table between refreshes.

use sha2::{Digest, Sha256};

use crate::models::FlightKpiRecord;

/// Calculate SHA-256 checksum over a fetched row sequence.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
///
/// Each field is fed to the hasher with a separator so that adjacent values
/// cannot run together. Row order is part of the checksum.
pub fn calculate_records_checksum(records: &[FlightKpiRecord]) -> String {
    let mut hasher = Sha256::new();
    for record in records {
        hasher.update(record.window_start.and_utc().timestamp_micros().to_le_bytes());
        hasher.update(record.origin_country.as_bytes());
        hasher.update([0u8]);
        hasher.update(record.total_flights.to_le_bytes());
        hasher.update(record.avg_velocity.to_bits().to_le_bytes());
        hasher.update(record.on_ground.to_le_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(country: &str, hour: u32) -> FlightKpiRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        FlightKpiRecord::new(ts, country, 3, 420.0, 1)
    }

    #[test]
    fn test_records_checksum_sensitive_to_fields() {
        let base = vec![record("US", 1), record("FR", 0)];
        let mut changed = base.clone();
        changed[1].on_ground = 2;
        assert_eq!(
            calculate_records_checksum(&base),
            calculate_records_checksum(&base.clone())
        );
        assert_ne!(
            calculate_records_checksum(&base),
            calculate_records_checksum(&changed)
        );
    }

    #[test]
    fn test_records_checksum_separates_labels() {
        let a = vec![record("AB", 0), record("C", 0)];
        let b = vec![record("A", 0), record("BC", 0)];
        assert_ne!(calculate_records_checksum(&a), calculate_records_checksum(&b));
    }
}
