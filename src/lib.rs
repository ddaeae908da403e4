//! Department and employee queries against a PostgreSQL database.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod utils;
