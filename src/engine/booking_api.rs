use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::BookingAPI,
    entities::Booking,
    error::{invalid_input_error, Error},
};

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn submit_draft(&self, id: Uuid) -> Result<Booking, Error> {
        let form = self.claim_form(&id).await?;
        let snapshot = form.snapshot().await;

        let booking = Booking::new(snapshot.draft, snapshot.estimate);

        if let Err(err) = self.insert_booking(&booking).await {
            self.restore_form(id, form).await;
            return Err(err);
        }

        tracing::info!(
            "booked {} ride {} for {}",
            booking.draft.service_type.name(),
            booking.id,
            booking.estimate.price
        );

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn find_booking(&self, id: Uuid) -> Result<Booking, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM bookings WHERE id = $1").bind(&id))
            .await?;

        let result = maybe_result.ok_or_else(|| invalid_input_error())?;
        let Json(booking) = result.try_get("data")?;

        Ok(booking)
    }
}

impl Engine {
    async fn insert_booking(&self, booking: &Booking) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO bookings (id, created_at, data) VALUES ($1, $2, $3)")
                .bind(&booking.id)
                .bind(&booking.created_at)
                .bind(Json(booking)),
        )
        .await?;

        Ok(())
    }
}
