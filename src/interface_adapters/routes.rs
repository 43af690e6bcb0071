use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::interface_adapters::errors::not_found;
use crate::interface_adapters::handlers::{admin, home, login_page, logout, submit_login};
use crate::interface_adapters::middleware::require_session;
use crate::interface_adapters::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login_page).post(submit_login))
        .route("/logout", get(logout))
        .route(
            "/admin",
            get(admin).route_layer(from_fn_with_state(state.clone(), require_session)),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
