use serde::{Deserialize, Serialize};

use crate::entities::{RateTable, ServiceType};

/// Road distance reported by the mapping provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distance {
    pub meters: u64,
}

impl Distance {
    pub fn kilometers(&self) -> f64 {
        self.meters as f64 / 1000.0
    }
}

/// Distance and price shown to the customer before submitting a booking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub distance_km: u64,
    pub price: u64,
}

impl Estimate {
    /// Both values come from the same unrounded kilometer figure and are
    /// rounded independently, half away from zero.
    pub fn derive(distance: Distance, service_type: ServiceType, rates: &RateTable) -> Self {
        let km = distance.kilometers();
        let rate = rates.rate_for(service_type);

        Self {
            distance_km: km.round() as u64,
            price: (km * rate).round() as u64,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> RateTable {
        RateTable::new(15.0, 20.0).unwrap()
    }

    #[test]
    fn local_ride_uses_base_rate() {
        let estimate = Estimate::derive(Distance { meters: 8000 }, ServiceType::LocalRide, &rates());

        assert_eq!(
            estimate,
            Estimate {
                distance_km: 8,
                price: 120
            }
        );
    }

    #[test]
    fn airport_pickup_uses_airport_rate() {
        let estimate =
            Estimate::derive(Distance { meters: 8000 }, ServiceType::AirportPickup, &rates());

        assert_eq!(estimate.distance_km, 8);
        assert_eq!(estimate.price, 160);
    }

    #[test]
    fn distance_rounds_half_away_from_zero() {
        let cases = [(0, 0), (499, 0), (500, 1), (1499, 1), (1500, 2), (2500, 3)];

        for (meters, km) in cases {
            let estimate =
                Estimate::derive(Distance { meters }, ServiceType::LocalRide, &rates());
            assert_eq!(estimate.distance_km, km, "{} meters", meters);
        }
    }

    #[test]
    fn price_uses_unrounded_kilometers() {
        // 8.4 km rounds to 8 km, but 8.4 * 15 = 126
        let estimate = Estimate::derive(Distance { meters: 8400 }, ServiceType::LocalRide, &rates());

        assert_eq!(estimate.distance_km, 8);
        assert_eq!(estimate.price, 126);
    }

    #[test]
    fn derivation_is_idempotent() {
        let first = Estimate::derive(Distance { meters: 12345 }, ServiceType::AirportDrop, &rates());
        let second = Estimate::derive(Distance { meters: 12345 }, ServiceType::AirportDrop, &rates());

        assert_eq!(first, second);
    }
}
