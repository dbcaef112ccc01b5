use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{BookingDraft, Estimate};

/// A submitted draft together with the estimate shown at submission time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    #[serde(flatten)]
    pub draft: BookingDraft,
    pub estimate: Estimate,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(draft: BookingDraft, estimate: Estimate) -> Self {
        Self {
            id: Uuid::new_v4(),
            draft,
            estimate,
            created_at: Utc::now(),
        }
    }
}

#[test]
fn booking_serializes_flat() {
    use crate::entities::ServiceType;

    let draft = BookingDraft {
        customer_name: "Asha".into(),
        pickup: "Andheri".into(),
        dropoff: "Bandra".into(),
        service_type: ServiceType::LocalRide,
        ..Default::default()
    };
    let booking = Booking::new(
        draft,
        Estimate {
            distance_km: 8,
            price: 120,
        },
    );

    let value = serde_json::to_value(&booking).unwrap();
    assert_eq!(value["customer_name"], "Asha");
    assert_eq!(value["service_type"], "local-ride");
    assert_eq!(value["estimate"]["price"], 120);

    let decoded: Booking = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, booking);
}
