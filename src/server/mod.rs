mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post, put},
    Router,
};

use crate::api::API;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{bookings, drafts, places, rates};

type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/rates", get(rates::find))
        .route("/drafts", post(drafts::create))
        .route(
            "/drafts/:id",
            get(drafts::find)
                .patch(drafts::update)
                .delete(drafts::discard),
        )
        .route("/drafts/:id/pickup", put(drafts::select_pickup))
        .route("/drafts/:id/dropoff", put(drafts::select_dropoff))
        .route("/drafts/:id/submit", post(bookings::submit))
        .route("/bookings/:id", get(bookings::find))
        .route("/places/suggestions", get(places::find_suggestions))
        .route("/places/details/:id", get(places::find))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}
