use log::debug;
use crate::db::Session;
use crate::errors::AppError;
use crate::models::employee::Employee;

const SELECT_BY_ID: &str = "SELECT id, name, surname FROM employees WHERE id = $1";

pub async fn find(session: &mut Session, id: i32) -> Result<Option<Employee>, AppError> {
    let conn = session.connection()?;
    debug!("{} [{}]", SELECT_BY_ID, id);

    sqlx::query_as::<_, Employee>(SELECT_BY_ID)
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(|err| AppError::Query(err.to_string()))
}
