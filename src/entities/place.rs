use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.lat, coordinates.lng)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

impl Place {
    /// The formatted address, falling back to the place name.
    pub fn address(&self) -> Result<String, Error> {
        [&self.formatted_address, &self.name]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
            .cloned()
            .ok_or_else(|| invalid_input_error())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub place_id: String,
    pub description: String,
}

/// Where a selected pickup or dropoff place comes from.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceSource {
    GooglePlaces {
        place_id: String,
        session_token: String,
    },
    Selection(Place),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_prefers_formatted_address() {
        let place = Place {
            place_id: None,
            name: Some("Bandra".into()),
            formatted_address: Some("Bandra West, Mumbai, Maharashtra, India".into()),
        };

        assert_eq!(
            place.address().unwrap(),
            "Bandra West, Mumbai, Maharashtra, India"
        );
    }

    #[test]
    fn address_falls_back_to_name() {
        let place = Place {
            place_id: None,
            name: Some("Chhatrapati Shivaji Maharaj International Airport".into()),
            formatted_address: Some("".into()),
        };

        assert_eq!(
            place.address().unwrap(),
            "Chhatrapati Shivaji Maharaj International Airport"
        );
    }

    #[test]
    fn address_requires_name_or_formatted_address() {
        let place = Place {
            place_id: Some("abc".into()),
            name: None,
            formatted_address: None,
        };

        assert_eq!(place.address().unwrap_err(), invalid_input_error());
    }

    #[test]
    fn place_source_parses_both_shapes() {
        let source: PlaceSource =
            serde_json::from_str(r#"{"place_id":"ChIJ","session_token":"s1"}"#).unwrap();
        assert!(matches!(source, PlaceSource::GooglePlaces { .. }));

        let source: PlaceSource = serde_json::from_str(r#"{"name":"Andheri"}"#).unwrap();
        assert!(matches!(source, PlaceSource::Selection(_)));
    }
}
