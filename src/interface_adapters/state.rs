use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::entities::{Credentials, SessionState};
use crate::domain::ports::{CredentialVerifier, SessionStore};

// Requests are served concurrently, so the single session flag sits behind
// a mutex shared by every handler.
pub type SharedSessionState = Arc<Mutex<SessionState>>;

// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: SharedSessionState,
    pub verifier: StaticCredentialVerifier,
}

impl AppState {
    // The process always starts anonymous.
    pub fn new(verifier: StaticCredentialVerifier) -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionState::Anonymous)),
            verifier,
        }
    }
}

// In-memory store adapter over the shared session flag.
#[derive(Clone)]
pub struct InMemorySessionStore {
    pub session: SharedSessionState,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self) -> Result<SessionState, String> {
        Ok(*self.session.lock().await)
    }

    async fn set_authenticated(&self) -> Result<(), String> {
        *self.session.lock().await = SessionState::Authenticated;
        Ok(())
    }

    async fn set_anonymous(&self) -> Result<(), String> {
        *self.session.lock().await = SessionState::Anonymous;
        Ok(())
    }
}

// Exact-match verifier holding the expected identity pair.
#[derive(Clone)]
pub struct StaticCredentialVerifier {
    pub username: String,
    pub password: String,
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, credentials: &Credentials) -> bool {
        credentials.username == self.username && credentials.password == self.password
    }
}
