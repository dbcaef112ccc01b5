use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};

use crate::api::PlaceAPI;
use crate::entities::{Coordinates, Place, PlaceSuggestion};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct SuggestionParams {
    input: String,
    session_token: String,
    lat: Option<f64>,
    lng: Option<f64>,
    radius: Option<f64>,
}

impl SuggestionParams {
    fn bias(&self) -> Option<(Coordinates, f64)> {
        match (self.lat, self.lng, self.radius) {
            (Some(lat), Some(lng), Some(radius)) => Some((Coordinates { lat, lng }, radius)),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct FindParams {
    session_token: String,
}

pub async fn find_suggestions(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<Vec<PlaceSuggestion>>, Error> {
    let bias = params.bias();
    let suggestions = api
        .find_place_suggestions(params.input, bias, params.session_token)
        .await?;

    Ok(suggestions.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(place_id): Path<String>,
    Query(params): Query<FindParams>,
) -> Result<Json<Place>, Error> {
    let place = api.find_place(place_id, params.session_token).await?;

    Ok(place.into())
}

#[test]
fn bias_needs_location_and_radius() {
    let params: SuggestionParams = serde_json::from_str(
        r#"{"input": "andh", "session_token": "s1", "lat": 19.11, "lng": 72.84}"#,
    )
    .unwrap();
    assert_eq!(params.bias(), None);

    let params: SuggestionParams = serde_json::from_str(
        r#"{"input": "andh", "session_token": "s1", "lat": 19.11, "lng": 72.84, "radius": 30000}"#,
    )
    .unwrap();
    assert_eq!(
        params.bias(),
        Some((Coordinates { lat: 19.11, lng: 72.84 }, 30000.0))
    );
}
