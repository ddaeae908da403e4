//! Exit status and stderr of the built binary

use assert_cmd::Command;
use predicates::prelude::*;

fn butchers_db() -> Command {
    let mut cmd = Command::cargo_bin("butchers-db").unwrap();
    cmd.env("RUST_LOG", "info").env_remove("DATABASE_URL");
    cmd
}

#[test]
fn test_config_error_reported_once() {
    let mut cmd = butchers_db();
    cmd.args(["--database-url", "mysql://root@localhost/shop", "select"]);

    cmd.assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::function(|stderr: &str| {
            stderr.matches("Configuration Error").count() == 1
        }));
}

#[test]
fn test_connection_error_reported_once() {
    let mut cmd = butchers_db();
    cmd.args(["--database-url", "postgres://nobody@127.0.0.1:1/none", "select"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::function(|stderr: &str| {
            stderr.matches("Connection Error").count() == 1
        }));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let mut cmd = butchers_db();
    cmd.arg("truncate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
