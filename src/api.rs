use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{
    Booking, Coordinates, DraftField, Place, PlaceSource, PlaceSuggestion, RateTable,
};
use crate::error::Error;
use crate::form::FormSnapshot;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub id: Uuid,
    #[serde(flatten)]
    pub form: FormSnapshot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stop {
    Pickup,
    Dropoff,
}

impl Stop {
    pub fn field(&self, address: String) -> DraftField {
        match self {
            Self::Pickup => DraftField::Pickup(address),
            Self::Dropoff => DraftField::Dropoff(address),
        }
    }
}

#[async_trait]
pub trait RateAPI {
    async fn find_rates(&self) -> Result<RateTable, Error>;
}

#[async_trait]
pub trait DraftAPI {
    async fn create_draft(&self, fields: Vec<DraftField>) -> Result<Draft, Error>;
    async fn find_draft(&self, id: Uuid) -> Result<Draft, Error>;
    async fn update_draft(&self, id: Uuid, fields: Vec<DraftField>) -> Result<Draft, Error>;
    async fn select_place(&self, id: Uuid, stop: Stop, source: PlaceSource) -> Result<Draft, Error>;
    async fn discard_draft(&self, id: Uuid) -> Result<(), Error>;
}

#[async_trait]
pub trait PlaceAPI {
    async fn find_place_suggestions(
        &self,
        input: String,
        bias: Option<(Coordinates, f64)>,
        session_token: String,
    ) -> Result<Vec<PlaceSuggestion>, Error>;
    async fn find_place(&self, place_id: String, session_token: String) -> Result<Place, Error>;
}

#[async_trait]
pub trait BookingAPI {
    async fn submit_draft(&self, id: Uuid) -> Result<Booking, Error>;
    async fn find_booking(&self, id: Uuid) -> Result<Booking, Error>;
}

pub trait API: RateAPI + DraftAPI + PlaceAPI + BookingAPI {}
