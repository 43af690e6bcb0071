use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::domain::entities::AuthDecision;
use crate::domain::errors::AppError;
use crate::interface_adapters::state::{AppState, InMemorySessionStore};
use crate::use_cases::authorize::AuthorizeUseCase;

// Session gate applied to protected routes. Admits the request into the
// inner handler or rejects with 401, never both.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let use_case = AuthorizeUseCase {
        store: InMemorySessionStore {
            session: state.session.clone(),
        },
    };

    match use_case.execute().await? {
        AuthDecision::Admit => Ok(next.run(request).await),
        AuthDecision::Reject => {
            debug!(path = %request.uri().path(), "rejected unauthenticated request");
            Err(AppError::Unauthorized)
        }
    }
}
