use crate::domain::entities::{AuthDecision, SessionState};
use crate::domain::errors::AppError;
use crate::domain::ports::SessionStore;

// Gate use case consulted before serving a protected resource.
pub struct AuthorizeUseCase<S> {
    pub store: S,
}

impl<S> AuthorizeUseCase<S>
where
    S: SessionStore,
{
    // Reads the session state once and returns exactly one decision.
    // Admit and Reject are mutually exclusive by construction.
    pub async fn execute(&self) -> Result<AuthDecision, AppError> {
        let state = self.store.get().await.map_err(|_| AppError::Internal)?;

        match state {
            SessionState::Authenticated => Ok(AuthDecision::Admit),
            SessionState::Anonymous => Ok(AuthDecision::Reject),
        }
    }
}
