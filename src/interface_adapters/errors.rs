use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::errors::AppError;

// Translates application errors into terminal HTTP responses. Every failed
// request ends here with a status and a short plain-text body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.message()).into_response()
    }
}

// Fallback for requests no route matched. Runs last, after normal dispatch
// and error translation.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
