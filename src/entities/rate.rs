use serde::{Deserialize, Serialize};

use crate::entities::ServiceType;
use crate::error::{config_error, Error};

/// Price per kilometer, by service category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub base_rate: f64,
    pub airport_rate: f64,
}

impl RateTable {
    pub fn new(base_rate: f64, airport_rate: f64) -> Result<Self, Error> {
        if !base_rate.is_finite() || base_rate < 0.0 {
            return Err(config_error("BASE_RATE"));
        }

        if !airport_rate.is_finite() || airport_rate < 0.0 {
            return Err(config_error("AIRPORT_RATE"));
        }

        Ok(Self {
            base_rate,
            airport_rate,
        })
    }

    pub fn rate_for(&self, service_type: ServiceType) -> f64 {
        if service_type.is_airport() {
            self.airport_rate
        } else {
            self.base_rate
        }
    }
}
