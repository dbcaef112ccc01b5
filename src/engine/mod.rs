mod booking_api;
mod draft_api;
mod place_api;
#[cfg(test)]
pub(crate) mod testing;

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::{Executor, Pool, Postgres};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    api::API,
    entities::RateTable,
    error::{draft_not_found_error, Error},
    external::PlaceLookup,
    form::{BookingForm, DynDistanceLookup},
};

type Database = Postgres;

pub type DynPlaceLookup = Arc<dyn PlaceLookup + Send + Sync>;

pub struct Engine {
    pool: Pool<Database>,
    rates: RateTable,
    distances: DynDistanceLookup,
    places: DynPlaceLookup,
    // open drafts live until submitted or discarded; nothing expires them
    drafts: RwLock<HashMap<Uuid, Arc<BookingForm>>>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(
        pool: Pool<Database>,
        rates: RateTable,
        distances: DynDistanceLookup,
        places: DynPlaceLookup,
    ) -> Result<Self, Error> {
        pool.execute("CREATE TABLE IF NOT EXISTS bookings (id UUID PRIMARY KEY, created_at TIMESTAMPTZ NOT NULL, data JSONB NOT NULL)")
            .await?;

        Ok(Self::build(pool, rates, distances, places))
    }

    pub(crate) fn build(
        pool: Pool<Database>,
        rates: RateTable,
        distances: DynDistanceLookup,
        places: DynPlaceLookup,
    ) -> Self {
        Self {
            pool,
            rates,
            distances,
            places,
            drafts: RwLock::new(HashMap::new()),
        }
    }

    async fn form(&self, id: &Uuid) -> Result<Arc<BookingForm>, Error> {
        self.drafts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| draft_not_found_error())
    }

    /// Removes the draft from the registry so no other caller can submit or
    /// edit it.
    async fn claim_form(&self, id: &Uuid) -> Result<Arc<BookingForm>, Error> {
        self.drafts
            .write()
            .await
            .remove(id)
            .ok_or_else(|| draft_not_found_error())
    }

    async fn restore_form(&self, id: Uuid, form: Arc<BookingForm>) {
        self.drafts.write().await.insert(id, form);
    }
}

impl API for Engine {}
