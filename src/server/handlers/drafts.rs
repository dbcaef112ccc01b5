use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::{Draft, DraftAPI, Stop};
use crate::entities::{DraftField, PlaceSource, ServiceType};
use crate::error::{invalid_input_error, Error};
use crate::server::DynAPI;

/// Any subset of draft fields. Absent fields are left as they are.
#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftParams {
    customer_name: Option<String>,
    customer_phone: Option<String>,
    customer_email: Option<String>,
    pickup: Option<String>,
    dropoff: Option<String>,
    service_type: Option<ServiceType>,
    date: Option<String>,
    time: Option<String>,
}

impl DraftParams {
    fn into_fields(self) -> Vec<DraftField> {
        [
            self.customer_name.map(DraftField::CustomerName),
            self.customer_phone.map(DraftField::CustomerPhone),
            self.customer_email.map(DraftField::CustomerEmail),
            self.pickup.map(DraftField::Pickup),
            self.dropoff.map(DraftField::Dropoff),
            self.service_type.map(DraftField::ServiceType),
            self.date.map(DraftField::Date),
            self.time.map(DraftField::Time),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// A request without a JSON body opens an empty draft. A body that is present
/// but does not parse is rejected.
pub async fn create(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<DraftParams>, JsonRejection>,
) -> Result<Json<Draft>, Error> {
    let params = match params {
        Ok(Json(params)) => params,
        Err(JsonRejection::MissingJsonContentType(_)) => DraftParams::default(),
        Err(err) => {
            tracing::debug!("rejected draft body: {}", err);
            return Err(invalid_input_error());
        }
    };

    let draft = api.create_draft(params.into_fields()).await?;

    Ok(draft.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Draft>, Error> {
    let draft = api.find_draft(id).await?;

    Ok(draft.into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<DraftParams>,
) -> Result<Json<Draft>, Error> {
    let draft = api.update_draft(id, params.into_fields()).await?;

    Ok(draft.into())
}

pub async fn discard(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    api.discard_draft(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn select_pickup(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(source): Json<PlaceSource>,
) -> Result<Json<Draft>, Error> {
    let draft = api.select_place(id, Stop::Pickup, source).await?;

    Ok(draft.into())
}

pub async fn select_dropoff(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(source): Json<PlaceSource>,
) -> Result<Json<Draft>, Error> {
    let draft = api.select_place(id, Stop::Dropoff, source).await?;

    Ok(draft.into())
}

#[test]
fn params_keep_field_order_and_skip_absent() {
    let params: DraftParams = serde_json::from_str(
        r#"{"time": "09:30", "pickup": "Andheri", "service_type": "local-ride"}"#,
    )
    .unwrap();

    assert_eq!(
        params.into_fields(),
        vec![
            DraftField::Pickup("Andheri".into()),
            DraftField::ServiceType(ServiceType::LocalRide),
            DraftField::Time("09:30".into()),
        ]
    );
}
