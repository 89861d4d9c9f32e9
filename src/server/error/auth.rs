use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header was sent.
    #[error("Missing bearer token")]
    MissingToken,

    /// The token failed signature or expiry validation.
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token verified but no session holds it (signed out or never issued).
    #[error("No session found for token of user {0}")]
    SessionNotFound(i32),

    /// Handler reached without the authentication middleware running first.
    #[error("Request is not authenticated")]
    NotAuthenticated,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant results in 401 Unauthorized with a generic message. The detailed
/// reason is logged at debug level only, to avoid telling clients which part of
/// their credentials was rejected.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        error_response(StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
    }
}
