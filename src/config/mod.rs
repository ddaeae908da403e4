use std::env;
use std::net::Ipv6Addr;
use url::Url;
use validator::{Validate, ValidationError};
use crate::errors::AppError;
use crate::utils::validation::validate_payload;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: &str = "5432";
const DEFAULT_NAME: &str = "butchers";

#[derive(Debug, Clone, Validate)]
pub struct Config {
    #[validate(url, custom = "validate_postgres_scheme")]
    pub database_url: String,
}

fn validate_postgres_scheme(database_url: &str) -> Result<(), ValidationError> {
    match Url::parse(database_url) {
        Ok(url) if matches!(url.scheme(), "postgres" | "postgresql") => Ok(()),
        _ => Err(ValidationError::new("scheme must be postgres or postgresql")),
    }
}

impl Config {
    /// Reads `DATABASE_URL`, or assembles a URL from the `DB_*` variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let user = lookup("DB_USER").ok_or_else(|| {
                    AppError::Config("DATABASE_URL or DB_USER must be set".to_string())
                })?;
                let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
                let port = lookup("DB_PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
                let name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_NAME.to_string());
                build_url(&host, &port, &name, &user, lookup("DB_PASSWORD").as_deref())?
            }
        };

        Self::new(database_url)
    }

    pub fn new(database_url: String) -> Result<Self, AppError> {
        let config = Config { database_url };
        validate_payload(&config)?;
        Ok(config)
    }

    /// The database URL with its password masked, for logging.
    pub fn redacted_url(&self) -> String {
        match Url::parse(&self.database_url) {
            Ok(mut url) => {
                if url.password().is_some() {
                    let _ = url.set_password(Some("***"));
                }
                url.to_string()
            }
            Err(_) => "<invalid url>".to_string(),
        }
    }
}

fn build_url(
    host: &str,
    port: &str,
    name: &str,
    user: &str,
    password: Option<&str>,
) -> Result<String, AppError> {
    let port: u16 = port
        .parse()
        .map_err(|_| AppError::Config(format!("DB_PORT is not a valid port: {}", port)))?;

    let host = match host.parse::<Ipv6Addr>() {
        Ok(addr) => format!("[{}]", addr),
        Err(_) => host.to_string(),
    };

    let mut url = Url::parse(&format!("postgres://{}:{}", host, port))
        .map_err(|err| AppError::Config(format!("DB_HOST is invalid: {}", err)))?;
    url.set_path(&format!("/{}", name));
    url.set_username(user)
        .map_err(|_| AppError::Config("DB_USER cannot be used in a URL".to_string()))?;
    url.set_password(password)
        .map_err(|_| AppError::Config("DB_PASSWORD cannot be used in a URL".to_string()))?;

    Ok(url.to_string())
}
