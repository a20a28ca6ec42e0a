//! Dashboard session: the explicit state holder behind the dashboard.
//!
//! A session owns the repository handle, the currently installed
//! [`DatasetSnapshot`] and the operator's [`FilterCriteria`]. Refreshes are
//! last-request-wins: each one takes a generation ticket, and its result is
//! installed only if no newer refresh has started in the meantime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::aggregation::compute_dashboard_data;
use super::error::{DashboardError, DashboardResult};
use super::filtering;
use crate::api::{
    DashboardData, DashboardNotice, DatasetSnapshot, DateRange, FilterCriteria, FilterOptions,
};
use crate::db::{self, KpiRepository};

/// What a refresh did to the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshOutcome {
    /// A new dataset was installed and the criteria reset to its defaults.
    Loaded,
    /// The fetched rows hash to the installed checksum; criteria were kept.
    Unchanged,
    /// The table returned zero rows.
    Empty,
    /// A newer refresh started before this one finished; the result was dropped.
    Superseded,
}

/// Summary of one refresh, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshReport {
    pub refresh_id: Uuid,
    pub generation: u64,
    pub record_count: usize,
    /// `None` when a superseded fetch failed.
    pub checksum: Option<String>,
    pub outcome: RefreshOutcome,
}

/// Views together with the criteria and dataset that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub data: DashboardData,
    /// `None` when the installed dataset is empty.
    pub criteria: Option<FilterCriteria>,
    pub refresh_id: Uuid,
}

#[derive(Default)]
struct SessionState {
    snapshot: Option<Arc<DatasetSnapshot>>,
    options: Option<FilterOptions>,
    criteria: Option<FilterCriteria>,
}

pub struct DashboardSession {
    repo: Arc<dyn KpiRepository>,
    generation: AtomicU64,
    state: RwLock<SessionState>,
}

impl DashboardSession {
    pub fn new(repo: Arc<dyn KpiRepository>) -> Self {
        Self {
            repo,
            generation: AtomicU64::new(0),
            state: RwLock::new(SessionState::default()),
        }
    }

    /// The repository this session reads from.
    pub fn repository(&self) -> &Arc<dyn KpiRepository> {
        &self.repo
    }

    /// Fetch the table once and install the result.
    ///
    /// A fetch failure is returned as [`DashboardError::DataUnavailable`] and
    /// leaves the previously installed dataset in place. A superseded refresh
    /// reports [`RefreshOutcome::Superseded`] whether its fetch succeeded or not.
    pub async fn refresh(&self) -> DashboardResult<RefreshReport> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let refresh_id = Uuid::new_v4();
        info!(%refresh_id, generation, "refresh started");

        let fetched = db::load_dataset(self.repo.as_ref(), refresh_id).await;

        let mut state = self.state.write();
        if self.generation.load(Ordering::SeqCst) != generation {
            warn!(%refresh_id, generation, "refresh superseded; discarding result");
            let (record_count, checksum) = match &fetched {
                Ok(snapshot) => (snapshot.len(), Some(snapshot.checksum.clone())),
                Err(_) => (0, None),
            };
            return Ok(RefreshReport {
                refresh_id,
                generation,
                record_count,
                checksum,
                outcome: RefreshOutcome::Superseded,
            });
        }

        let snapshot = fetched?;
        let outcome = Self::install(&mut state, snapshot);
        let snapshot = state.snapshot.as_ref().ok_or(DashboardError::NotLoaded)?;

        info!(
            %refresh_id,
            generation,
            rows = snapshot.len(),
            ?outcome,
            "refresh completed"
        );
        Ok(RefreshReport {
            refresh_id,
            generation,
            record_count: snapshot.len(),
            checksum: Some(snapshot.checksum.clone()),
            outcome,
        })
    }

    fn install(state: &mut SessionState, snapshot: DatasetSnapshot) -> RefreshOutcome {
        if snapshot.is_empty() {
            state.snapshot = Some(Arc::new(snapshot));
            state.options = None;
            state.criteria = None;
            return RefreshOutcome::Empty;
        }

        let unchanged = state
            .snapshot
            .as_ref()
            .is_some_and(|current| current.checksum == snapshot.checksum)
            && state.criteria.is_some();

        if unchanged {
            state.snapshot = Some(Arc::new(snapshot));
            return RefreshOutcome::Unchanged;
        }

        state.options = filtering::filter_options(snapshot.records());
        state.criteria = state.options.as_ref().map(FilterOptions::default_criteria);
        state.snapshot = Some(Arc::new(snapshot));
        RefreshOutcome::Loaded
    }

    /// The installed snapshot, if any.
    pub fn snapshot(&self) -> Option<Arc<DatasetSnapshot>> {
        self.state.read().snapshot.clone()
    }

    /// Current criteria. `None` before a non-empty dataset is installed.
    pub fn criteria(&self) -> Option<FilterCriteria> {
        self.state.read().criteria.clone()
    }

    /// Country list and date bounds for the control panel.
    ///
    /// `Ok(None)` when the installed dataset is empty.
    pub fn filter_options(&self) -> DashboardResult<Option<FilterOptions>> {
        let state = self.state.read();
        if state.snapshot.is_none() {
            return Err(DashboardError::NotLoaded);
        }
        Ok(state.options.clone())
    }

    /// Replace the criteria wholesale.
    pub fn set_criteria(&self, criteria: FilterCriteria) -> DashboardResult<()> {
        let mut state = self.state.write();
        if state.snapshot.is_none() {
            return Err(DashboardError::NotLoaded);
        }
        debug!(
            countries = criteria.countries.len(),
            lower = %criteria.date_range.lower,
            upper = %criteria.date_range.upper,
            "criteria changed"
        );
        state.criteria = Some(criteria);
        Ok(())
    }

    /// Change the country selection, keeping the date range.
    pub fn set_countries<I, S>(&self, countries: I) -> DashboardResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.update_criteria(|current| current.with_countries(countries))
    }

    /// Change the date range, keeping the country selection.
    pub fn set_date_range(&self, lower: NaiveDate, upper: NaiveDate) -> DashboardResult<()> {
        self.update_criteria(|current| current.with_date_range(DateRange::new(lower, upper)))
    }

    fn update_criteria<F>(&self, change: F) -> DashboardResult<()>
    where
        F: FnOnce(FilterCriteria) -> FilterCriteria,
    {
        let mut state = self.state.write();
        let current = state.criteria.take().ok_or(DashboardError::NotLoaded)?;
        let criteria = change(current);
        debug!(
            countries = criteria.countries.len(),
            lower = %criteria.date_range.lower,
            upper = %criteria.date_range.upper,
            "criteria changed"
        );
        state.criteria = Some(criteria);
        Ok(())
    }

    /// Restore the default criteria of the installed dataset.
    pub fn reset_criteria(&self) -> DashboardResult<()> {
        let mut state = self.state.write();
        if state.snapshot.is_none() {
            return Err(DashboardError::NotLoaded);
        }
        state.criteria = state.options.as_ref().map(FilterOptions::default_criteria);
        Ok(())
    }

    /// Views for the current criteria.
    pub fn view(&self) -> DashboardResult<DashboardData> {
        self.current_view().map(|view| view.data)
    }

    /// Views for the current criteria, with the criteria and refresh id they
    /// were computed from. All three come from one read of the session state.
    pub fn current_view(&self) -> DashboardResult<DashboardView> {
        let (snapshot, criteria) = {
            let state = self.state.read();
            (state.snapshot.clone(), state.criteria.clone())
        };
        let snapshot = snapshot.ok_or(DashboardError::NotLoaded)?;
        let data = Self::evaluate(&snapshot, criteria.clone());
        Ok(DashboardView {
            data,
            criteria,
            refresh_id: snapshot.refresh_id,
        })
    }

    /// Views for criteria derived from the installed dataset's defaults.
    ///
    /// `overlay` receives the default criteria and returns the criteria to
    /// evaluate. The defaults and the rows it is evaluated against belong to
    /// the same snapshot even if a refresh lands in between. The session's
    /// own criteria are left untouched.
    pub fn view_from_defaults<F, E>(&self, overlay: F) -> Result<DashboardView, E>
    where
        F: FnOnce(&FilterCriteria) -> Result<FilterCriteria, E>,
        E: From<DashboardError>,
    {
        let (snapshot, options) = {
            let state = self.state.read();
            (state.snapshot.clone(), state.options.clone())
        };
        let snapshot = snapshot.ok_or(DashboardError::NotLoaded)?;
        let criteria = match options {
            Some(options) => Some(overlay(&options.default_criteria())?),
            None => None,
        };
        let data = Self::evaluate(&snapshot, criteria.clone());
        Ok(DashboardView {
            data,
            criteria,
            refresh_id: snapshot.refresh_id,
        })
    }

    /// Views for `criteria` without touching the session's own criteria.
    pub fn view_with(&self, criteria: &FilterCriteria) -> DashboardResult<DashboardData> {
        let snapshot = self.snapshot().ok_or(DashboardError::NotLoaded)?;
        Ok(Self::evaluate(&snapshot, Some(criteria.clone())))
    }

    fn evaluate(snapshot: &DatasetSnapshot, criteria: Option<FilterCriteria>) -> DashboardData {
        if snapshot.is_empty() {
            return DashboardData::empty(DashboardNotice::EmptyResult);
        }

        let filtered = match criteria {
            Some(criteria) => filtering::apply(snapshot.records(), &criteria),
            None => Vec::new(),
        };
        compute_dashboard_data(filtered)
    }
}
