use log::info;
use sqlx::Executor;
use crate::db::Session;
use crate::errors::AppError;

pub const SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Creates the `employees` and `departments` tables if they are missing.
pub async fn apply(session: &mut Session) -> Result<(), AppError> {
    let conn = session.connection()?;
    conn.execute(SCHEMA)
        .await
        .map_err(|err| AppError::Query(err.to_string()))?;

    info!("Schema is in place");
    Ok(())
}
