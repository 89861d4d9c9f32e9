use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, BookingIdDto, BookingRequestDto},
    },
    server::{
        error::AppError,
        model::{auth::AuthUser, booking::MoveBookingParams},
        service::booking::BookingService,
        state::AppState,
        util::parse::{parse_positive_id, positive_id},
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Reads a usable room id from a booking request body.
///
/// A malformed body, a missing `roomId` and a non-positive `roomId` are all answered
/// with 404, the same as a room that does not exist.
fn room_id_from_body(
    payload: Result<Json<BookingRequestDto>, JsonRejection>,
) -> Result<i32, AppError> {
    payload
        .ok()
        .and_then(|Json(body)| body.room_id)
        .and_then(positive_id)
        .ok_or_else(|| AppError::NotFound("A valid roomId is required".to_string()))
}

/// Get the caller's booking.
///
/// # Returns
/// - `200 OK` - Booking with the room it occupies
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - User has no booking
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/booking",
    tag = BOOKING_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User's booking", body = BookingDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User has no booking", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .get_booking(user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User has no booking".to_string()))?;

    Ok(Json(booking.into_dto()))
}

/// Book a room.
///
/// The room must exist and have a free slot, and the caller must hold a paid, in
/// person ticket that includes a hotel stay.
///
/// # Returns
/// - `200 OK` - Booking created
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Room is full or the caller's ticket does not allow booking
/// - `404 Not Found` - Missing or invalid `roomId`, or no such room
/// - `409 Conflict` - Room changed while the booking was being made
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/booking",
    tag = BOOKING_TAG,
    security(("bearer" = [])),
    request_body = BookingRequestDto,
    responses(
        (status = 200, description = "Booking created", body = BookingIdDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Room is full or business rules not respected", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room was modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<BookingRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let room_id = room_id_from_body(payload)?;
    let service = BookingService::new(&state.db);

    let room = service.check_room_availability(room_id).await?;
    service.check_business_rule(user.user_id).await?;

    let booking = service.create_booking(user.user_id, room).await?;

    Ok(Json(BookingIdDto {
        booking_id: booking.id,
    }))
}

/// Move a booking to another room.
///
/// # Returns
/// - `200 OK` - Booking moved; body carries the booking's id
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Target room is full or the caller has no booking
/// - `404 Not Found` - Missing or invalid ids, no such booking, or no such room
/// - `409 Conflict` - Booking is already in that room, or a room changed concurrently
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/booking/{booking_id}",
    tag = BOOKING_TAG,
    security(("bearer" = [])),
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    request_body = BookingRequestDto,
    responses(
        (status = 200, description = "Booking moved", body = BookingIdDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Room is full or business rules not respected", body = ErrorDto),
        (status = 404, description = "Booking or room not found", body = ErrorDto),
        (status = 409, description = "Same room, or room was modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(booking_id): Path<String>,
    payload: Result<Json<BookingRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let room_id = room_id_from_body(payload)?;
    let booking_id = parse_positive_id(&booking_id)
        .ok_or_else(|| AppError::NotFound("A valid bookingId is required".to_string()))?;
    let service = BookingService::new(&state.db);

    let new_room = service.check_room_availability(room_id).await?;
    service.check_update_business_rule(user.user_id).await?;

    let old_booking = service
        .get_booking_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    if old_booking.room_id == new_room.id {
        return Err(AppError::Conflict(
            "Booking is already in this room".to_string(),
        ));
    }

    let booking_id = service
        .update_booking(MoveBookingParams {
            booking_id: old_booking.id,
            old_room_id: old_booking.room_id,
            new_room,
        })
        .await?;

    Ok(Json(BookingIdDto { booking_id }))
}
