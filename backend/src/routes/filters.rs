use serde::{Deserialize, Serialize};

use crate::models::{DateRange, FilterCriteria};

/// Inputs for the control panel widgets, derived from the fetched dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Distinct origin countries, ascending.
    pub countries: Vec<String>,
    /// Earliest and latest `window_start` dates.
    pub date_bounds: DateRange,
}

impl FilterOptions {
    /// Criteria selecting every country over the full date span.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.countries.iter().cloned(), self.date_bounds)
    }
}
