//! Filter engine: selects the records matching the operator's criteria.
//!
//! Filtering always starts from the full fetched sequence and never mutates
//! it; the output preserves input order.

use std::collections::BTreeSet;

use crate::api::{DateRange, FilterCriteria, FilterOptions, FlightKpiRecord};

/// True when `record` passes both the country and the date predicate.
///
/// The date predicate compares the calendar date of `window_start`, so an
/// upper bound of `2024-03-05` keeps a window starting at `2024-03-05 23:00`.
pub fn matches(record: &FlightKpiRecord, criteria: &FilterCriteria) -> bool {
    criteria.countries.contains(&record.origin_country)
        && criteria.date_range.contains(record.window_date())
}

/// Apply `criteria` to `records`, preserving order.
pub fn apply(records: &[FlightKpiRecord], criteria: &FilterCriteria) -> Vec<FlightKpiRecord> {
    if criteria.excludes_everything() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|r| matches(r, criteria))
        .cloned()
        .collect()
}

/// Control-panel inputs derived from a dataset.
///
/// `None` for an empty dataset, which has no date bounds.
pub fn filter_options(records: &[FlightKpiRecord]) -> Option<FilterOptions> {
    let lower = records.iter().map(|r| r.window_date()).min()?;
    let upper = records.iter().map(|r| r.window_date()).max()?;

    let countries: BTreeSet<&str> = records.iter().map(|r| r.origin_country.as_str()).collect();

    Some(FilterOptions {
        countries: countries.into_iter().map(str::to_string).collect(),
        date_bounds: DateRange::new(lower, upper),
    })
}

/// Criteria that select every record of `records`: all distinct countries
/// and the `[min date, max date]` interval.
pub fn default_criteria(records: &[FlightKpiRecord]) -> Option<FilterCriteria> {
    filter_options(records).map(|options| options.default_criteria())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn record(country: &str, d: u32, h: u32) -> FlightKpiRecord {
        FlightKpiRecord::new(date(d).and_hms_opt(h, 0, 0).unwrap(), country, 5, 300.0, 1)
    }

    fn sample() -> Vec<FlightKpiRecord> {
        vec![
            record("US", 3, 10),
            record("FR", 2, 9),
            record("US", 1, 23),
            record("DE", 1, 0),
        ]
    }

    #[test]
    fn test_apply_filters_by_country_and_date() {
        let criteria = FilterCriteria::new(["US"], DateRange::new(date(1), date(2)));
        let result = apply(&sample(), &criteria);
        assert_eq!(result, vec![record("US", 1, 23)]);
    }

    #[test]
    fn test_apply_preserves_order() {
        let criteria = FilterCriteria::new(["US", "DE"], DateRange::new(date(1), date(3)));
        let result = apply(&sample(), &criteria);
        let countries: Vec<_> = result.iter().map(|r| r.origin_country.as_str()).collect();
        assert_eq!(countries, vec!["US", "US", "DE"]);
    }

    #[test]
    fn test_upper_bound_includes_whole_day() {
        let criteria = FilterCriteria::new(["US"], DateRange::single_day(date(1)));
        assert_eq!(apply(&sample(), &criteria).len(), 1);
    }

    #[test]
    fn test_empty_countries_selects_nothing() {
        let criteria = FilterCriteria::new(Vec::<String>::new(), DateRange::new(date(1), date(3)));
        assert!(apply(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_inverted_range_selects_nothing() {
        let criteria = FilterCriteria::new(["US", "FR", "DE"], DateRange::new(date(3), date(1)));
        assert!(apply(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_unknown_country_is_ignored() {
        let criteria = FilterCriteria::new(["US", "JP"], DateRange::new(date(1), date(3)));
        assert_eq!(apply(&sample(), &criteria).len(), 2);
    }

    #[test]
    fn test_default_criteria_covers_dataset() {
        let records = sample();
        let criteria = default_criteria(&records).unwrap();

        assert_eq!(
            criteria.countries.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["DE", "FR", "US"]
        );
        assert_eq!(criteria.date_range, DateRange::new(date(1), date(3)));
        assert_eq!(apply(&records, &criteria), records);
    }

    #[test]
    fn test_no_options_for_empty_dataset() {
        assert!(filter_options(&[]).is_none());
        assert!(default_criteria(&[]).is_none());
    }
}
