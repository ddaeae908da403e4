use std::fmt;
use std::io;

#[derive(Debug)]
pub enum AppError {
    Connection(String),
    Query(String),
    Close(String),
    Config(String),
    Output(String),
}

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Connection(msg) => write!(f, "Connection Error: {}", msg),
            AppError::Query(msg) => write!(f, "Query Error: {}", msg),
            AppError::Close(msg) => write!(f, "Close Error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::Output(msg) => write!(f, "Output Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Output(err.to_string())
    }
}
