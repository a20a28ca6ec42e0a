//! Repository-agnostic data access used by the dashboard session.
//!
//! Wraps the [`KpiRepository`] calls with logging and snapshot construction so
//! every backend produces the same [`DatasetSnapshot`] for the same rows.

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::repository::{KpiRepository, RepositoryResult};
use crate::models::DatasetSnapshot;

/// Check if the data source is reachable.
pub async fn health_check<R: KpiRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Fetch every row of the KPI table and wrap it in a snapshot.
///
/// Failures are tagged with the `load_dataset` operation and logged before
/// being returned; nothing is retried.
pub async fn load_dataset<R: KpiRepository + ?Sized>(
    repo: &R,
    refresh_id: Uuid,
) -> RepositoryResult<DatasetSnapshot> {
    debug!(%refresh_id, "fetching flight KPI rows");

    let records = match repo.fetch_flight_kpis().await {
        Ok(records) => records,
        Err(e) => {
            let e = e.with_operation("load_dataset");
            warn!(%refresh_id, error = %e, "failed to fetch flight KPI rows");
            return Err(e);
        }
    };

    let snapshot = DatasetSnapshot::new(refresh_id, records);
    info!(
        %refresh_id,
        rows = snapshot.len(),
        checksum = %snapshot.checksum,
        "loaded flight KPI dataset"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::RepositoryError;
    use crate::models::FlightKpiRecord;
    use chrono::NaiveDate;

    fn record(country: &str, day: u32) -> FlightKpiRecord {
        FlightKpiRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            country,
            10,
            420.0,
            1,
        )
    }

    #[tokio::test]
    async fn test_load_dataset_wraps_rows() {
        let repo = LocalRepository::with_records(vec![record("US", 1), record("FR", 2)]);
        let id = Uuid::new_v4();
        let snapshot = load_dataset(&repo, id).await.unwrap();

        assert_eq!(snapshot.refresh_id, id);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.checksum.len(), 64);
    }

    #[tokio::test]
    async fn test_load_dataset_tags_failures() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        let err = load_dataset(&repo, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConnectionError { .. }));
        assert_eq!(err.context().operation.as_deref(), Some("load_dataset"));
    }

    #[tokio::test]
    async fn test_health_check_passthrough() {
        let repo = LocalRepository::new();
        assert!(health_check(&repo).await.unwrap());
    }
}
