use log::{info, warn};
use sqlx::{Connection, PgConnection};
use crate::config::Config;
use crate::errors::AppError;

/// A live connection to the database server.
///
/// The connection is released by [`Session::close`], or on drop when the
/// session goes out of scope still open. Any use after `close` fails.
pub struct Session {
    conn: Option<PgConnection>,
}

impl Session {
    pub async fn open(config: &Config) -> Result<Self, AppError> {
        let conn = super::connect(config).await?;
        info!("Connected to {}", config.redacted_url());
        Ok(Session { conn: Some(conn) })
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    pub fn connection(&mut self) -> Result<&mut PgConnection, AppError> {
        self.conn
            .as_mut()
            .ok_or_else(|| AppError::Query("session is closed".to_string()))
    }

    pub async fn close(&mut self) -> Result<(), AppError> {
        let conn = self
            .conn
            .take()
            .ok_or_else(|| AppError::Close("session is already closed".to_string()))?;

        conn.close()
            .await
            .map_err(|err| AppError::Close(err.to_string()))?;

        info!("Connection closed");
        Ok(())
    }

    /// Drops the connection without the close handshake. Returns whether a
    /// connection was still held.
    pub fn release(&mut self) -> bool {
        self.conn.take().is_some()
    }

    #[cfg(test)]
    pub(crate) fn closed() -> Self {
        Session { conn: None }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.release() {
            warn!("Session dropped while open, releasing connection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_session_refuses_queries() {
        let mut session = Session::closed();
        assert!(!session.is_open());

        let err = session.connection().unwrap_err();
        assert!(matches!(err, AppError::Query(ref msg) if msg == "session is closed"));
    }

    #[test]
    fn release_without_connection_is_noop() {
        let mut session = Session::closed();
        assert!(!session.release());
        drop(session);
    }

    #[tokio::test]
    async fn closing_twice_reports_error() {
        let mut session = Session::closed();
        let err = session.close().await.unwrap_err();
        assert!(matches!(err, AppError::Close(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn open_fails_with_connection_error() {
        // Port 1 on loopback refuses connections.
        let config = Config::new("postgres://nobody@127.0.0.1:1/none".to_string()).unwrap();
        let err = Session::open(&config).await.err().unwrap();
        assert!(matches!(err, AppError::Connection(_)));
    }
}
