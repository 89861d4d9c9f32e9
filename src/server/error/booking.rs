use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

/// Reasons a booking may not be created or moved.
///
/// The set is closed: every variant is matched explicitly when mapping to a status
/// code, so adding a kind forces the HTTP mapping to be revisited.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    /// No room exists with the requested id.
    #[error("There is not a room with the given id")]
    RoomNotFound,

    /// The requested room has no capacity left.
    #[error("The chosen room is at capacity")]
    FullRoom,

    /// The user's enrollment, ticket or existing booking does not allow the operation.
    #[error("Business rules not respected")]
    BusinessRuleViolation,
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::RoomNotFound => StatusCode::NOT_FOUND,
            Self::FullRoom => StatusCode::FORBIDDEN,
            Self::BusinessRuleViolation => StatusCode::FORBIDDEN,
        }
    }
}

/// Converts booking errors into HTTP responses.
///
/// - `RoomNotFound` → 404 Not Found
/// - `FullRoom` / `BusinessRuleViolation` → 403 Forbidden
///
/// The body carries the variant's message.
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        error_response(self.status_code(), self.to_string())
    }
}
