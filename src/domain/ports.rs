use async_trait::async_trait;

use crate::domain::entities::{Credentials, SessionState};

// Port for the shared session state read by the gate and mutated by the
// login/logout flows.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self) -> Result<SessionState, String>;
    async fn set_authenticated(&self) -> Result<(), String>;
    async fn set_anonymous(&self) -> Result<(), String>;
}

// Port for checking submitted credentials against the expected identity.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credentials: &Credentials) -> bool;
}
