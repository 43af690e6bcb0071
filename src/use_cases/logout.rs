use crate::domain::errors::AppError;
use crate::domain::ports::SessionStore;

// Logout use case with injected dependencies. Unconditional and idempotent.
pub struct LogoutUseCase<S> {
    pub store: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(&self) -> Result<(), AppError> {
        self.store
            .set_anonymous()
            .await
            .map_err(|_| AppError::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SessionState;
    use crate::use_cases::test_support::{FailureFlags, RecordingStore};

    #[tokio::test]
    async fn when_session_is_authenticated_then_logout_clears_it() {
        let store = RecordingStore::new(SessionState::Authenticated);
        let use_case = LogoutUseCase {
            store: store.clone(),
        };

        use_case.execute().await.expect("expected logout to succeed");

        assert_eq!(store.current(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn when_session_is_already_anonymous_then_logout_keeps_it_anonymous() {
        let store = RecordingStore::new(SessionState::Anonymous);
        let use_case = LogoutUseCase {
            store: store.clone(),
        };

        use_case.execute().await.expect("expected logout to succeed");

        assert_eq!(store.current(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn when_logout_runs_twice_then_resulting_state_is_the_same() {
        let store = RecordingStore::new(SessionState::Authenticated);
        let use_case = LogoutUseCase {
            store: store.clone(),
        };

        use_case
            .execute()
            .await
            .expect("expected first logout to succeed");
        use_case
            .execute()
            .await
            .expect("expected second logout to succeed");

        assert_eq!(store.current(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn when_store_set_fails_then_returns_internal_error() {
        let use_case = LogoutUseCase {
            store: RecordingStore::new(SessionState::Authenticated).with_failures(FailureFlags {
                set: true,
                ..Default::default()
            }),
        };

        let result = use_case.execute().await;

        assert!(matches!(result, Err(AppError::Internal)));
    }
}
