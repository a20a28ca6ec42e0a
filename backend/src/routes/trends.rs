use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Total flights for one exact `window_start` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    pub window_start: NaiveDateTime,
    pub total_flights: u128,
}
