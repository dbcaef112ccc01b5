use async_trait::async_trait;
use reqwest::Response as HttpResponse;
use serde::{Deserialize, Serialize};

use crate::{
    entities::{Coordinates, Distance, Place, PlaceSuggestion},
    error::{invalid_input_error, lookup_status_error, upstream_error, Error},
    external::{DistanceLookup, PlaceLookup},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    result: Option<T>,
    predictions: Option<T>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DistanceMatrix {
    status: String,
    #[serde(default)]
    rows: Vec<DistanceMatrixRow>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DistanceMatrixRow {
    elements: Vec<DistanceMatrixElement>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DistanceMatrixElement {
    status: String,
    distance: Option<Measure>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Measure {
    value: u64,
}

impl DistanceMatrix {
    /// Distance of the single origin/destination pair.
    fn into_distance(self) -> Result<Distance, Error> {
        if self.status != "OK" {
            return Err(lookup_status_error(&self.status));
        }

        let element = self
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| upstream_error())?;

        if element.status != "OK" {
            return Err(lookup_status_error(&element.status));
        }

        let measure = element.distance.ok_or_else(|| upstream_error())?;

        Ok(Distance {
            meters: measure.value,
        })
    }
}

/// Client for the Distance Matrix and Places web services.
#[derive(Clone, Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn new(api_base: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
            api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("https://{}/maps/api/{}", self.api_base, path)
    }
}

fn check_status(res: &HttpResponse) -> Result<(), Error> {
    let status_code = res.status().as_u16();

    if (400..500).contains(&status_code) {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(())
}

#[async_trait]
impl DistanceLookup for GoogleMaps {
    #[tracing::instrument(skip_all)]
    async fn driving_distance(&self, origin: &str, destination: &str) -> Result<Distance, Error> {
        let res = self
            .client
            .get(self.url("distancematrix/json"))
            .query(&[("key", self.api_key.as_str())])
            .query(&[("origins", origin)])
            .query(&[("destinations", destination)])
            .query(&[("mode", "driving")])
            .send()
            .await?;

        check_status(&res)?;

        let data: DistanceMatrix = res.json().await?;

        data.into_distance()
    }
}

#[async_trait]
impl PlaceLookup for GoogleMaps {
    #[tracing::instrument(skip(self, input, bias))]
    async fn find_place_suggestions(
        &self,
        input: String,
        bias: Option<(Coordinates, f64)>,
        session_token: String,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        let mut req = self
            .client
            .get(self.url("place/autocomplete/json"))
            .query(&[("key", self.api_key.as_str())])
            .query(&[("input", input)])
            .query(&[("sessiontoken", session_token)]);

        if let Some((location, radius)) = bias {
            let location: String = location.into();
            req = req
                .query(&[("location", location)])
                .query(&[("radius", radius)]);
        }

        let res = req.send().await?;

        check_status(&res)?;

        let data: Response<Vec<PlaceSuggestion>> = res.json().await?;

        suggestions_from(data)
    }

    #[tracing::instrument(skip(self))]
    async fn find_place(&self, place_id: String, session_token: String) -> Result<Place, Error> {
        let res = self
            .client
            .get(self.url("place/details/json"))
            .query(&[("key", self.api_key.as_str())])
            .query(&[("sessiontoken", session_token)])
            .query(&[("place_id", place_id)])
            .query(&[("fields", "place_id,name,formatted_address")])
            .send()
            .await?;

        check_status(&res)?;

        let data: Response<Place> = res.json().await?;

        place_from(data)
    }
}

fn suggestions_from(data: Response<Vec<PlaceSuggestion>>) -> Result<Vec<PlaceSuggestion>, Error> {
    match data.status.as_str() {
        "ZERO_RESULTS" => Ok(data.predictions.unwrap_or_default()),
        "OK" => data.predictions.ok_or_else(|| upstream_error()),
        _ => Err(upstream_error()),
    }
}

fn place_from(data: Response<Place>) -> Result<Place, Error> {
    if data.status != "OK" {
        return Err(upstream_error());
    }

    data.result.ok_or_else(|| upstream_error())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(json: &str) -> DistanceMatrix {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn reads_first_element_distance() {
        let data = matrix(
            r#"{
                "status": "OK",
                "origin_addresses": ["Andheri, Mumbai, Maharashtra, India"],
                "destination_addresses": ["Bandra West, Mumbai, Maharashtra, India"],
                "rows": [{"elements": [{
                    "status": "OK",
                    "distance": {"text": "8.0 km", "value": 8000},
                    "duration": {"text": "25 mins", "value": 1500}
                }]}]
            }"#,
        );

        assert_eq!(data.into_distance().unwrap(), Distance { meters: 8000 });
    }

    #[test]
    fn top_level_status_is_reported() {
        let data = matrix(r#"{"status": "REQUEST_DENIED", "rows": []}"#);

        assert_eq!(
            data.into_distance().unwrap_err(),
            lookup_status_error("REQUEST_DENIED")
        );
    }

    #[test]
    fn element_status_is_reported() {
        let data = matrix(
            r#"{"status": "OK", "rows": [{"elements": [{"status": "NOT_FOUND"}]}]}"#,
        );

        assert_eq!(
            data.into_distance().unwrap_err(),
            lookup_status_error("NOT_FOUND")
        );
    }

    #[test]
    fn missing_element_is_upstream_error() {
        let data = matrix(r#"{"status": "OK", "rows": [{"elements": []}]}"#);

        assert_eq!(data.into_distance().unwrap_err(), upstream_error());
    }

    #[test]
    fn zero_suggestions_is_empty_list() {
        let data: Response<Vec<PlaceSuggestion>> =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS", "predictions": []}"#).unwrap();

        assert!(suggestions_from(data).unwrap().is_empty());
    }

    #[test]
    fn place_details_require_ok() {
        let data: Response<Place> = serde_json::from_str(
            r#"{"status": "OK", "result": {"place_id": "ChIJ", "name": "Bandra", "formatted_address": "Bandra West, Mumbai"}}"#,
        )
        .unwrap();
        assert_eq!(place_from(data).unwrap().address().unwrap(), "Bandra West, Mumbai");

        let data: Response<Place> =
            serde_json::from_str(r#"{"status": "INVALID_REQUEST"}"#).unwrap();
        assert_eq!(place_from(data).unwrap_err(), upstream_error());
    }

    #[test]
    fn url_uses_api_base() {
        let maps = GoogleMaps::new("maps.googleapis.com".into(), "key".into());

        assert_eq!(
            maps.url("distancematrix/json"),
            "https://maps.googleapis.com/maps/api/distancematrix/json"
        );
    }
}
