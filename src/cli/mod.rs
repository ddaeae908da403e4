//! Command line argument definitions.

use clap::{Parser, Subcommand};

/// Runs department queries against the butchers database
#[derive(Parser, Debug)]
#[command(name = "butchers-db")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// PostgreSQL connection URL, overrides DATABASE_URL and DB_* variables
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    /// Print banners without colour
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Select, insert, update and delete in sequence (default)
    Demo,

    /// Print every department with its manager
    Select,

    /// Insert the Custom1 and Custom2 departments
    Insert,

    /// Make employee 1 the manager of departments 1 and 2
    Update,

    /// Delete the Custom1 and Custom2 departments
    Delete,

    /// Create the employees and departments tables if missing
    InitSchema,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_demo() {
        let cli = Cli::try_parse_from(["butchers-db"]).unwrap();
        assert_eq!(cli.command(), Commands::Demo);
        assert!(cli.database_url.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn parses_flags_and_subcommand() {
        let cli = Cli::try_parse_from([
            "butchers-db",
            "--database-url",
            "postgres://app@localhost/shop",
            "--no-color",
            "init-schema",
        ])
        .unwrap();
        assert_eq!(cli.command(), Commands::InitSchema);
        assert_eq!(cli.database_url.as_deref(), Some("postgres://app@localhost/shop"));
        assert!(cli.no_color);
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["butchers-db", "truncate"]).is_err());
    }
}
