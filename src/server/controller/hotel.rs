use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hotel::{HotelDto, HotelWithRoomsDto},
    },
    server::{
        error::AppError, model::hotel::Hotel, service::hotel::HotelService, state::AppState,
        util::parse::parse_positive_id,
    },
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotel";

/// List all hotels.
///
/// # Access Control
/// - Caller's ticket must be paid, in person and include a hotel stay
///
/// # Returns
/// - `200 OK` - All hotels
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `402 Payment Required` - Ticket unpaid, remote, or without hotel
/// - `404 Not Found` - Caller has no enrollment or ticket
#[utoipa::path(
    get,
    path = "/hotels",
    tag = HOTEL_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All hotels", body = Vec<HotelDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 402, description = "Ticket does not grant a hotel stay", body = ErrorDto),
        (status = 404, description = "Enrollment or ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotels(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let hotels = HotelService::new(&state.db).get_all().await?;

    Ok(Json(
        hotels.into_iter().map(Hotel::into_dto).collect::<Vec<_>>(),
    ))
}

/// Get a hotel with its rooms.
///
/// # Access Control
/// - Same ticket requirements as `GET /hotels`
///
/// # Returns
/// - `200 OK` - Hotel with its `Rooms`
/// - `400 Bad Request` - `hotel_id` is not a positive integer, or no hotel has that id
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `402 Payment Required` - Ticket unpaid, remote, or without hotel
/// - `404 Not Found` - Caller has no enrollment or ticket
#[utoipa::path(
    get,
    path = "/hotels/{hotel_id}",
    tag = HOTEL_TAG,
    security(("bearer" = [])),
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Hotel with rooms", body = HotelWithRoomsDto),
        (status = 400, description = "Invalid or unknown hotel id", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 402, description = "Ticket does not grant a hotel stay", body = ErrorDto),
        (status = 404, description = "Enrollment or ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel_rooms(
    State(state): State<AppState>,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hotel_id = parse_positive_id(&hotel_id)
        .ok_or_else(|| AppError::BadRequest("Invalid hotel id".to_string()))?;

    let hotel = HotelService::new(&state.db).get_with_rooms(hotel_id).await?;

    Ok(Json(hotel.into_dto()))
}
