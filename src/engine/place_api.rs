use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PlaceAPI,
    entities::{Coordinates, Place, PlaceSuggestion},
    error::Error,
    external::PlaceLookup,
};

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self, input, bias))]
    async fn find_place_suggestions(
        &self,
        input: String,
        bias: Option<(Coordinates, f64)>,
        session_token: String,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        self.places
            .find_place_suggestions(input, bias, session_token)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn find_place(&self, place_id: String, session_token: String) -> Result<Place, Error> {
        self.places.find_place(place_id, session_token).await
    }
}
