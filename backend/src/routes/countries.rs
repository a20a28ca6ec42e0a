use serde::{Deserialize, Serialize};

/// Total flights for one origin country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryBucket {
    pub origin_country: String,
    pub total_flights: u128,
}
