use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

/// Reasons a user may not browse hotels.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelAccessError {
    #[error("User has no enrollment")]
    EnrollmentNotFound,

    #[error("User has no ticket")]
    TicketNotFound,

    #[error("Ticket has not been paid")]
    TicketNotPaid,

    /// Ticket type is remote or does not include a hotel stay.
    #[error("Ticket does not include hotel")]
    HotelNotIncluded,
}

/// Converts hotel access errors into HTTP responses.
///
/// - `EnrollmentNotFound` / `TicketNotFound` → 404 Not Found
/// - `TicketNotPaid` / `HotelNotIncluded` → 402 Payment Required
impl IntoResponse for HotelAccessError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::EnrollmentNotFound | Self::TicketNotFound => StatusCode::NOT_FOUND,
            Self::TicketNotPaid | Self::HotelNotIncluded => StatusCode::PAYMENT_REQUIRED,
        };

        error_response(status, self.to_string())
    }
}
