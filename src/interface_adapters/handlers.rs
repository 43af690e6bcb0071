use axum::extract::{Form, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tracing::info;

use crate::domain::entities::Credentials;
use crate::domain::errors::AppError;
use crate::interface_adapters::protocol::{LoginForm, ADMIN_PAGE, HOME_PAGE, LOGIN_PAGE};
use crate::interface_adapters::state::{AppState, InMemorySessionStore};
use crate::use_cases::login::{LoginOutcome, LoginUseCase, PromptOutcome};
use crate::use_cases::logout::LogoutUseCase;

// 302 Found redirect. Axum's Redirect helpers emit 303/307/308, so the
// response is built by hand.
fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

fn session_store(state: &AppState) -> InMemorySessionStore {
    InMemorySessionStore {
        session: state.session.clone(),
    }
}

// Handler for the public landing page.
pub async fn home() -> &'static str {
    HOME_PAGE
}

// Handler for the login prompt. Already-active sessions skip the form.
pub async fn login_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let use_case = LoginUseCase {
        store: session_store(&state),
        verifier: state.verifier.clone(),
    };

    match use_case.prompt().await? {
        PromptOutcome::AlreadyAuthenticated => Ok(found("/admin")),
        PromptOutcome::ShowForm => Ok(Html(LOGIN_PAGE).into_response()),
    }
}

// Handler for login submissions.
pub async fn submit_login(
    State(state): State<AppState>,
    Form(payload): Form<LoginForm>,
) -> Result<Response, AppError> {
    let use_case = LoginUseCase {
        store: session_store(&state),
        verifier: state.verifier.clone(),
    };
    let credentials = Credentials {
        username: payload.username,
        password: payload.password,
    };

    match use_case.submit(credentials).await? {
        LoginOutcome::Accepted => {
            info!("session authenticated");
            Ok(found("/admin"))
        }
        LoginOutcome::Rejected => Ok(found("/login")),
    }
}

// Handler for ending the session. Safe to call in any state.
pub async fn logout(State(state): State<AppState>) -> Result<Response, AppError> {
    let use_case = LogoutUseCase {
        store: session_store(&state),
    };

    use_case.execute().await?;
    info!("session cleared");

    Ok(found("/login"))
}

// Handler for the protected admin page. Reached only after the gate admits.
pub async fn admin() -> &'static str {
    ADMIN_PAGE
}
