use futures_util::TryStreamExt;
use log::{debug, info};
use std::io::Write;
use crate::db::Session;
use crate::errors::AppError;
use crate::models::department::{Department, ManagedDepartment};
use crate::utils::console::Console;

/// Rows written by [`insert`] as `(name, manager)`.
pub const CUSTOM_DEPARTMENTS: [(&str, i32); 2] = [("Custom1", 1), ("Custom2", 2)];

/// Department ids touched by [`update`]. These are fixed and only line up
/// with the inserted rows on a freshly reset table.
pub const UPDATED_DEPARTMENT_IDS: [i32; 2] = [1, 2];

/// Manager assigned by [`update`].
pub const UPDATED_MANAGER: i32 = 1;

const SELECT_MANAGED: &str = "\
    SELECT d.id, d.name, e.name AS manager_name, e.surname AS manager_surname \
    FROM departments d \
    LEFT JOIN employees e ON d.manager = e.id \
    ORDER BY d.id";

const INSERT_DEPARTMENT: &str =
    "INSERT INTO departments (name, manager) VALUES ($1, $2) RETURNING id, name, manager";

const UPDATE_MANAGER: &str = "UPDATE departments SET manager = $1 WHERE id = $2";

const DELETE_BY_NAME: &str = "DELETE FROM departments WHERE name = $1";

fn query_error(err: sqlx::Error) -> AppError {
    AppError::Query(err.to_string())
}

/// Prints every department with its manager, ordered by id. Returns the
/// number of rows printed.
pub async fn select<W: Write>(
    session: &mut Session,
    console: &mut Console<W>,
) -> Result<usize, AppError> {
    let conn = session.connection()?;
    debug!("{}", SELECT_MANAGED);

    let mut rows = sqlx::query_as::<_, ManagedDepartment>(SELECT_MANAGED).fetch(conn);
    let mut count = 0;
    while let Some(row) = rows.try_next().await.map_err(query_error)? {
        console.line(&row)?;
        count += 1;
    }

    info!("Selected {} departments", count);
    Ok(count)
}

/// Inserts the two custom departments and returns them with their
/// server-assigned ids.
pub async fn insert(session: &mut Session) -> Result<Vec<Department>, AppError> {
    let conn = session.connection()?;
    let mut inserted = Vec::with_capacity(CUSTOM_DEPARTMENTS.len());

    for (name, manager) in CUSTOM_DEPARTMENTS {
        debug!("{} [{}, {}]", INSERT_DEPARTMENT, name, manager);
        let department = sqlx::query_as::<_, Department>(INSERT_DEPARTMENT)
            .bind(name)
            .bind(manager)
            .fetch_one(&mut *conn)
            .await
            .map_err(query_error)?;
        inserted.push(department);
    }

    info!(
        "Inserted departments with ids {:?}",
        inserted.iter().map(|d| d.id).collect::<Vec<_>>()
    );
    Ok(inserted)
}

/// Sets the manager of departments 1 and 2. Returns the rows affected.
pub async fn update(session: &mut Session) -> Result<u64, AppError> {
    let conn = session.connection()?;
    let mut affected = 0;

    for id in UPDATED_DEPARTMENT_IDS {
        debug!("{} [{}, {}]", UPDATE_MANAGER, UPDATED_MANAGER, id);
        affected += sqlx::query(UPDATE_MANAGER)
            .bind(UPDATED_MANAGER)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(query_error)?
            .rows_affected();
    }

    info!("Updated {} departments", affected);
    Ok(affected)
}

/// Removes the custom departments by name. Returns the rows affected.
pub async fn delete(session: &mut Session) -> Result<u64, AppError> {
    let conn = session.connection()?;
    let mut affected = 0;

    for (name, _) in CUSTOM_DEPARTMENTS {
        debug!("{} [{}]", DELETE_BY_NAME, name);
        affected += sqlx::query(DELETE_BY_NAME)
            .bind(name)
            .execute(&mut *conn)
            .await
            .map_err(query_error)?
            .rows_affected();
    }

    info!("Deleted {} departments", affected);
    Ok(affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn operations_on_closed_session_fail() {
        let mut session = Session::closed();
        let mut console = Console::new(Vec::new(), false);

        assert!(matches!(select(&mut session, &mut console).await, Err(AppError::Query(_))));
        assert!(matches!(insert(&mut session).await, Err(AppError::Query(_))));
        assert!(matches!(update(&mut session).await, Err(AppError::Query(_))));
        assert!(matches!(delete(&mut session).await, Err(AppError::Query(_))));
        assert!(console.into_inner().is_empty());
    }
}
