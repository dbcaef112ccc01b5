use std::sync::Arc;

use ridebook::config::Config;
use ridebook::db::PgPool;
use ridebook::engine::Engine;
use ridebook::error::Error;
use ridebook::external::google_maps::GoogleMaps;
use ridebook::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let PgPool(pool) = PgPool::new(&config.database_url, config.database_max_connections).await?;

    let maps = Arc::new(GoogleMaps::new(
        config.google_maps_api_base.clone(),
        config.google_maps_api_key.clone(),
    ));

    let engine = Engine::new(pool, config.rates, maps.clone(), maps).await?;

    serve(engine, config.listen_addr).await
}
