use super::Engine;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::{Draft, DraftAPI, PlaceAPI, RateAPI, Stop},
    entities::{DraftField, PlaceSource, RateTable},
    error::{draft_not_found_error, Error},
    form::BookingForm,
};

#[async_trait]
impl RateAPI for Engine {
    async fn find_rates(&self) -> Result<RateTable, Error> {
        Ok(self.rates)
    }
}

#[async_trait]
impl DraftAPI for Engine {
    #[tracing::instrument(skip_all)]
    async fn create_draft(&self, fields: Vec<DraftField>) -> Result<Draft, Error> {
        let id = Uuid::new_v4();
        let form = Arc::new(BookingForm::new(self.rates, self.distances.clone()));

        self.drafts.write().await.insert(id, form.clone());

        let snapshot = form.update_and_refresh(fields).await;

        Ok(Draft { id, form: snapshot })
    }

    #[tracing::instrument(skip(self))]
    async fn find_draft(&self, id: Uuid) -> Result<Draft, Error> {
        let form = self.form(&id).await?;

        Ok(Draft {
            id,
            form: form.snapshot().await,
        })
    }

    #[tracing::instrument(skip(self, fields))]
    async fn update_draft(&self, id: Uuid, fields: Vec<DraftField>) -> Result<Draft, Error> {
        let form = self.form(&id).await?;

        Ok(Draft {
            id,
            form: form.update_and_refresh(fields).await,
        })
    }

    #[tracing::instrument(skip(self, source))]
    async fn select_place(&self, id: Uuid, stop: Stop, source: PlaceSource) -> Result<Draft, Error> {
        let form = self.form(&id).await?;

        let place = match source {
            PlaceSource::Selection(place) => place,
            PlaceSource::GooglePlaces {
                place_id,
                session_token,
            } => self.find_place(place_id, session_token).await?,
        };

        let field = stop.field(place.address()?);

        Ok(Draft {
            id,
            form: form.update_and_refresh(vec![field]).await,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn discard_draft(&self, id: Uuid) -> Result<(), Error> {
        self.drafts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| draft_not_found_error())
    }
}
