pub mod google_maps;

use async_trait::async_trait;

use crate::entities::{Coordinates, Distance, Place, PlaceSuggestion};
use crate::error::Error;

/// Road distance between two free-form addresses, by car.
#[async_trait]
pub trait DistanceLookup {
    async fn driving_distance(&self, origin: &str, destination: &str) -> Result<Distance, Error>;
}

#[async_trait]
pub trait PlaceLookup {
    async fn find_place_suggestions(
        &self,
        input: String,
        bias: Option<(Coordinates, f64)>,
        session_token: String,
    ) -> Result<Vec<PlaceSuggestion>, Error>;

    async fn find_place(&self, place_id: String, session_token: String) -> Result<Place, Error>;
}
