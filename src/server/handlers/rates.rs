use axum::extract::{Extension, Json};

use crate::api::RateAPI;
use crate::entities::RateTable;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<RateTable>, Error> {
    let rates = api.find_rates().await?;

    Ok(rates.into())
}
