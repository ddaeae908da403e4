pub mod schema;
pub mod session;

use log::debug;
use sqlx::{Connection, PgConnection};
use crate::config::Config;
use crate::errors::AppError;

pub use session::Session;

/// Opens a single autocommit connection to the configured server.
pub async fn connect(config: &Config) -> Result<PgConnection, AppError> {
    debug!("Opening connection to {}", config.redacted_url());
    PgConnection::connect(&config.database_url)
        .await
        .map_err(|err| AppError::Connection(err.to_string()))
}
