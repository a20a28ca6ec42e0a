use serde::{Deserialize, Serialize};

/// Label of the total flights metric card.
pub const TOTAL_FLIGHTS_LABEL: &str = "Total Flights";
/// Label of the average velocity metric card.
pub const AVG_VELOCITY_LABEL: &str = "Avg Velocity";
/// Label of the on-ground metric card.
pub const ON_GROUND_LABEL: &str = "On Ground";

/// Rendered in place of a metric that is undefined (mean of no rows).
pub const METRIC_PLACEHOLDER: &str = "n/a";

/// Scalar KPI summary over a filtered dataset.
///
/// `avg_velocity_mean` keeps full precision; rounding to two decimals is
/// applied when the summary is turned into [`MetricCard`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Summed in 128 bits: every stored count fits in an `i64`, so no
    /// realistic row count can overflow the total.
    pub total_flights_sum: u128,
    /// `None` over an empty dataset.
    pub avg_velocity_mean: Option<f64>,
    pub on_ground_sum: u128,
    pub record_count: usize,
}

impl KpiSummary {
    /// Summary of an empty dataset: zero sums and an undefined mean.
    pub fn empty() -> Self {
        Self {
            total_flights_sum: 0,
            avg_velocity_mean: None,
            on_ground_sum: 0,
            record_count: 0,
        }
    }

    /// Mean velocity rounded for display.
    pub fn rounded_avg_velocity(&self) -> Option<f64> {
        self.avg_velocity_mean.map(round2)
    }

    /// The KPI row, in display order.
    pub fn metric_cards(&self) -> Vec<MetricCard> {
        vec![
            MetricCard::count(TOTAL_FLIGHTS_LABEL, self.total_flights_sum),
            MetricCard::measure(AVG_VELOCITY_LABEL, self.rounded_avg_velocity()),
            MetricCard::count(ON_GROUND_LABEL, self.on_ground_sum),
        ]
    }
}

/// One display-ready KPI tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    /// Numeric value, `null` when undefined. Counts above 2^53 lose
    /// precision here; `display` always carries the exact figure.
    pub value: Option<f64>,
    /// Text the tile shows; the placeholder when `value` is `None`.
    pub display: String,
}

impl MetricCard {
    fn count(label: &str, value: u128) -> Self {
        Self {
            label: label.to_string(),
            value: Some(value as f64),
            display: value.to_string(),
        }
    }

    fn measure(label: &str, value: Option<f64>) -> Self {
        let display = match value {
            Some(v) => format!("{:.2}", v),
            None => METRIC_PLACEHOLDER.to_string(),
        };
        Self {
            label: label.to_string(),
            value,
            display,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_none()
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
