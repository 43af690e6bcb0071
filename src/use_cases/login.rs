use crate::domain::entities::{Credentials, SessionState};
use crate::domain::errors::AppError;
use crate::domain::ports::{CredentialVerifier, SessionStore};

// Outcome of rendering the login prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    // Session is already active; the caller redirects to the admin area.
    AlreadyAuthenticated,
    ShowForm,
}

// Outcome of a login submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    // Session is now authenticated; redirect to the admin area.
    Accepted,
    // State unchanged; redirect back to the login prompt.
    Rejected,
}

// Login use case with injected dependencies.
pub struct LoginUseCase<S, V> {
    pub store: S,
    pub verifier: V,
}

impl<S, V> LoginUseCase<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    pub async fn prompt(&self) -> Result<PromptOutcome, AppError> {
        let state = self.store.get().await.map_err(|_| AppError::Internal)?;

        match state {
            SessionState::Authenticated => Ok(PromptOutcome::AlreadyAuthenticated),
            SessionState::Anonymous => Ok(PromptOutcome::ShowForm),
        }
    }

    pub async fn submit(&self, credentials: Credentials) -> Result<LoginOutcome, AppError> {
        // Failed logins redirect silently; no error detail reaches the user.
        if !self.verifier.verify(&credentials) {
            return Ok(LoginOutcome::Rejected);
        }

        self.store
            .set_authenticated()
            .await
            .map_err(|_| AppError::Internal)?;

        Ok(LoginOutcome::Accepted)
    }
}
