use log::{info, warn};
use std::io::Write;
use crate::db::Session;
use crate::errors::AppError;
use crate::handlers::{department, employee};
use crate::utils::console::Console;

/// Runs select, insert, update and delete, printing the departments
/// after each step.
pub async fn run<W: Write>(session: &mut Session, console: &mut Console<W>) -> Result<(), AppError> {
    console.banner("Before running program")?;
    department::select(session, console).await?;

    let inserted = department::insert(session).await?;
    let inserted_ids: Vec<i32> = inserted.iter().map(|d| d.id).collect();
    if inserted_ids != department::UPDATED_DEPARTMENT_IDS {
        warn!(
            "Inserted ids {:?} differ from the ids the update targets {:?}",
            inserted_ids,
            department::UPDATED_DEPARTMENT_IDS
        );
    }
    console.banner("After insert")?;
    department::select(session, console).await?;

    match employee::find(session, department::UPDATED_MANAGER).await? {
        Some(manager) => info!("Assigning {} {} as manager", manager.name, manager.surname),
        None => warn!("Employee {} does not exist", department::UPDATED_MANAGER),
    }
    department::update(session).await?;
    console.banner("After update")?;
    department::select(session, console).await?;

    department::delete(session).await?;
    console.banner("After delete")?;
    department::select(session, console).await?;

    Ok(())
}
