//! Application state

use std::sync::{Arc, RwLock};
use vidgate_core::error::SessionError;

/// The one shared outbound HTTP client for the process.
///
/// Opened by [`AppState::new`] before the listener starts and closed by
/// [`AppState::shutdown`] after the last request completes. Handlers clone the
/// client (cheap, it is a pooled handle) and must never close it themselves.
pub struct HttpSession {
    client: RwLock<Option<reqwest::Client>>,
}

impl HttpSession {
    /// Create a session holder with no client yet
    pub fn new() -> Self {
        Self {
            client: RwLock::new(None),
        }
    }

    /// Create the client. Idempotent: a second call keeps the first client.
    pub fn open(&self) {
        let mut guard = self.client.write().expect("session lock poisoned");
        if guard.is_none() {
            *guard = Some(reqwest::Client::new());
            tracing::info!("outbound HTTP session opened");
        }
    }

    /// Drop the client, closing its connection pool.
    ///
    /// A no-op when the session was never opened, so shutdown ordering bugs
    /// do not turn into panics. Must be the last operation against the
    /// session: `client()` fails afterwards.
    pub async fn close(&self) {
        let client = self.client.write().expect("session lock poisoned").take();
        if client.is_some() {
            // Dropping the handle releases the pool once in-flight requests
            // on cloned handles finish
            drop(client);
            tracing::info!("outbound HTTP session closed");
        }
    }

    /// Get a handle to the shared client
    pub fn client(&self) -> Result<reqwest::Client, SessionError> {
        self.client
            .read()
            .expect("session lock poisoned")
            .clone()
            .ok_or(SessionError)
    }
}

impl Default for HttpSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Shared outbound HTTP session
    pub http: Arc<HttpSession>,

    /// Media encoder binary to validate at startup
    pub ffmpeg: String,
}

impl AppState {
    /// Create new application state with an open HTTP session
    pub fn new() -> Self {
        let ffmpeg = std::env::var("VIDGATE_FFMPEG")
            .unwrap_or_else(|_| vidgate_core::toolcheck::DEFAULT_TOOL.to_string());

        let http = Arc::new(HttpSession::new());
        http.open();

        Self { http, ffmpeg }
    }

    /// Close the HTTP session; call after the server has stopped serving
    pub async fn shutdown(&self) {
        self.http.close().await;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_close_before_open_is_noop() {
        let session = HttpSession::new();
        session.close().await;
        assert!(session.client().is_err());
    }

    #[test]
    fn test_client_before_open_fails() {
        let session = HttpSession::new();
        assert!(session.client().is_err());
    }

    #[tokio::test]
    async fn test_open_then_client_then_close() {
        let session = HttpSession::new();
        session.open();
        assert!(session.client().is_ok());

        session.close().await;
        assert!(session.client().is_err());
    }

    #[test]
    fn test_open_is_idempotent() {
        let session = HttpSession::new();
        session.open();
        session.open();
        assert!(session.client().is_ok());
    }
}
