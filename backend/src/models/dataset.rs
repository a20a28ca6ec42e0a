use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::FlightKpiRecord;
use crate::db::checksum::calculate_records_checksum;

/// Result of one completed fetch, frozen for the rest of the session.
///
/// Shared as `Arc<DatasetSnapshot>` between the session and every view
/// computed from it; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct DatasetSnapshot {
    pub refresh_id: Uuid,
    pub fetched_at: DateTime<Utc>,
    /// SHA-256 over the fetched rows, used to detect an unchanged table.
    pub checksum: String,
    records: Vec<FlightKpiRecord>,
}

impl DatasetSnapshot {
    pub fn new(refresh_id: Uuid, records: Vec<FlightKpiRecord>) -> Self {
        let checksum = calculate_records_checksum(&records);
        Self {
            refresh_id,
            fetched_at: Utc::now(),
            checksum,
            records,
        }
    }

    /// Rows in fetch order (descending `window_start`).
    pub fn records(&self) -> &[FlightKpiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
