use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive calendar-date interval.
///
/// An inverted range (`lower > upper`) is representable on purpose: the
/// date picker can produce one, and filtering treats it as matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub lower: NaiveDate,
    pub upper: NaiveDate,
}

impl DateRange {
    pub fn new(lower: NaiveDate, upper: NaiveDate) -> Self {
        Self { lower, upper }
    }

    /// Range covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }

    /// Inclusive on both ends. Always false for an inverted range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        !self.is_inverted() && self.lower <= date && date <= self.upper
    }
}

/// Operator selection from the control panel.
///
/// Built fresh from the current control state on each interaction and
/// discarded once the filtered view has been produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected origin countries. Empty means "show nothing".
    pub countries: BTreeSet<String>,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn new<I, S>(countries: I, date_range: DateRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
            date_range,
        }
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    /// True when no record can possibly satisfy these criteria.
    pub fn excludes_everything(&self) -> bool {
        self.countries.is_empty() || self.date_range.is_inverted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_inclusive_bounds() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 3));
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 3)));
        assert!(!range.contains(date(2024, 1, 4)));
        assert!(!range.contains(date(2023, 12, 31)));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = DateRange::new(date(2024, 2, 1), date(2024, 1, 1));
        assert!(range.is_inverted());
        assert!(!range.contains(date(2024, 1, 15)));
        assert!(!range.contains(date(2024, 2, 1)));
    }

    #[test]
    fn test_criteria_builders() {
        let criteria = FilterCriteria::new(["US", "FR"], DateRange::single_day(date(2024, 1, 1)))
            .with_countries(["US"]);
        assert_eq!(criteria.countries.len(), 1);
        assert!(criteria.countries.contains("US"));
        assert!(!criteria.excludes_everything());

        let empty = criteria.clone().with_countries(Vec::<String>::new());
        assert!(empty.excludes_everything());

        let inverted =
            criteria.with_date_range(DateRange::new(date(2024, 2, 1), date(2024, 1, 1)));
        assert!(inverted.excludes_everything());
    }
}
