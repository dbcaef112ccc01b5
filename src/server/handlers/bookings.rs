use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::api::BookingAPI;
use crate::entities::Booking;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn submit(
    Extension(api): Extension<DynAPI>,
    Path(draft_id): Path<Uuid>,
) -> Result<Json<Booking>, Error> {
    let booking = api.submit_draft(draft_id).await?;

    Ok(booking.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, Error> {
    let booking = api.find_booking(id).await?;

    Ok(booking.into())
}
