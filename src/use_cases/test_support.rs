use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{Credentials, SessionState};
use crate::domain::ports::{CredentialVerifier, SessionStore};

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get: bool,
    pub set: bool,
}

// Fake session store that records state transitions for assertions.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    state: Arc<Mutex<SessionState>>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new(initial: SessionState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial)),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn current(&self) -> SessionState {
        *self.state.lock().expect("state mutex poisoned")
    }
}

#[async_trait]
impl SessionStore for RecordingStore {
    async fn get(&self) -> Result<SessionState, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }
        Ok(self.current())
    }

    async fn set_authenticated(&self) -> Result<(), String> {
        if self.failures.set {
            return Err("set failed".to_string());
        }
        *self.state.lock().expect("state mutex poisoned") = SessionState::Authenticated;
        Ok(())
    }

    async fn set_anonymous(&self) -> Result<(), String> {
        if self.failures.set {
            return Err("set failed".to_string());
        }
        *self.state.lock().expect("state mutex poisoned") = SessionState::Anonymous;
        Ok(())
    }
}

// Exact-pair verifier mirroring the production adapter.
pub(crate) struct FixedPairVerifier {
    pub username: &'static str,
    pub password: &'static str,
}

impl CredentialVerifier for FixedPairVerifier {
    fn verify(&self, credentials: &Credentials) -> bool {
        credentials.username == self.username && credentials.password == self.password
    }
}
