use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    #[default]
    AirportPickup,
    AirportDrop,
    LocalRide,
}

impl ServiceType {
    pub fn name(&self) -> String {
        match self {
            Self::AirportPickup => "airport-pickup".into(),
            Self::AirportDrop => "airport-drop".into(),
            Self::LocalRide => "local-ride".into(),
        }
    }

    pub fn is_airport(&self) -> bool {
        match self {
            Self::AirportPickup | Self::AirportDrop => true,
            Self::LocalRide => false,
        }
    }
}

/// In-progress booking form state. Nothing here is validated: empty names,
/// malformed contact details and past dates are all accepted as typed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub pickup: String,
    pub dropoff: String,
    pub service_type: ServiceType,
    pub date: String,
    pub time: String,
}

/// A single field-level assignment on a [`BookingDraft`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum DraftField {
    CustomerName(String),
    CustomerPhone(String),
    CustomerEmail(String),
    Pickup(String),
    Dropoff(String),
    ServiceType(ServiceType),
    Date(String),
    Time(String),
}

impl BookingDraft {
    /// Replaces one field, leaving the rest untouched. Returns true when an
    /// estimate input (pickup, dropoff or service type) changed value.
    pub fn set(&mut self, field: DraftField) -> bool {
        match field {
            DraftField::CustomerName(value) => self.customer_name = value,
            DraftField::CustomerPhone(value) => self.customer_phone = value,
            DraftField::CustomerEmail(value) => self.customer_email = value,
            DraftField::Date(value) => self.date = value,
            DraftField::Time(value) => self.time = value,
            DraftField::Pickup(value) => return replace(&mut self.pickup, value),
            DraftField::Dropoff(value) => return replace(&mut self.dropoff, value),
            DraftField::ServiceType(value) => return replace(&mut self.service_type, value),
        };

        false
    }

    /// Both addresses are present and differ, so a distance lookup makes sense.
    pub fn is_routable(&self) -> bool {
        !self.pickup.is_empty() && !self.dropoff.is_empty() && self.pickup != self.dropoff
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }

    *slot = value;
    true
}
