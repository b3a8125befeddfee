//! Handler errors and how they reach the client.

use api::{ApiError, CsrfRejected};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Csrf(#[from] CsrfRejected),

    #[error("Login required")]
    LoginRequired,

    /// The session layer is missing from the router.
    #[error("{1}")]
    NoSession(StatusCode, &'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Api(e) => {
                tracing::error!("Request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            AppError::Csrf(e) => (StatusCode::FORBIDDEN, e.to_string()).into_response(),
            AppError::LoginRequired => {
                (StatusCode::UNAUTHORIZED, "Login required").into_response()
            }
            AppError::NoSession(status, message) => (status, message).into_response(),
        }
    }
}
