use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::entities::RateTable;
use crate::error::{config_error, Error};

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub google_maps_api_base: String,
    pub google_maps_api_key: String,
    pub rates: RateTable,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let rates = RateTable::new(
            parse_or(&lookup, "BASE_RATE", 15.0)?,
            parse_or(&lookup, "AIRPORT_RATE", 20.0)?,
        )?;

        let google_maps_api_key = lookup("GOOGLE_MAPS_API_KEY")?;
        if google_maps_api_key.is_empty() {
            return Err(config_error("GOOGLE_MAPS_API_KEY"));
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL")?,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            google_maps_api_base: lookup("GOOGLE_MAPS_API_BASE")
                .unwrap_or_else(|_| "maps.googleapis.com".into()),
            google_maps_api_key,
            rates,
            listen_addr: parse_or(&lookup, "LISTEN_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Result<String, env::VarError>,
    T: FromStr,
{
    match lookup(name) {
        Ok(value) => value.trim().parse().map_err(|_| config_error(name)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err.into()),
    }
}
