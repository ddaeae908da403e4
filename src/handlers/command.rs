use log::info;
use std::io::Write;
use crate::cli::Commands;
use crate::db::{schema, Session};
use crate::errors::AppError;
use crate::handlers::{demo, department};
use crate::utils::console::Console;

/// Runs `command` and then closes the session, whether or not the command
/// succeeded. A command error is reported in preference to a close error.
pub async fn run<W: Write>(
    command: Commands,
    session: &mut Session,
    console: &mut Console<W>,
) -> Result<(), AppError> {
    let result = execute(command, session, console).await;
    let closed = session.close().await;
    result?;
    closed
}

pub async fn execute<W: Write>(
    command: Commands,
    session: &mut Session,
    console: &mut Console<W>,
) -> Result<(), AppError> {
    info!("Running {:?}", command);
    match command {
        Commands::Demo => demo::run(session, console).await,
        Commands::Select => department::select(session, console).await.map(|_| ()),
        Commands::Insert => {
            for inserted in department::insert(session).await? {
                console.line(format!("Inserted {} {}", inserted.id, inserted.name))?;
            }
            Ok(())
        }
        Commands::Update => {
            let affected = department::update(session).await?;
            console.line(format!("Updated {} departments", affected))
        }
        Commands::Delete => {
            let affected = department::delete(session).await?;
            console.line(format!("Deleted {} departments", affected))
        }
        Commands::InitSchema => schema::apply(session).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn command_error_wins_over_close_error() {
        // Both the command and the close fail on a closed session.
        let mut session = Session::closed();
        let mut console = Console::new(Vec::new(), false);

        let err = run(Commands::Select, &mut session, &mut console).await.unwrap_err();
        assert!(matches!(err, AppError::Query(ref msg) if msg == "session is closed"));
        assert!(!session.is_open());
    }

    #[tokio::test]
    async fn every_command_fails_on_closed_session() {
        for command in [
            Commands::Demo,
            Commands::Select,
            Commands::Insert,
            Commands::Update,
            Commands::Delete,
            Commands::InitSchema,
        ] {
            let mut session = Session::closed();
            let mut console = Console::new(Vec::new(), false);
            let err = execute(command, &mut session, &mut console).await.unwrap_err();
            assert!(matches!(err, AppError::Query(_)), "{:?} gave {}", command, err);
        }
    }
}
