use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        ticket::{CreateTicketDto, TicketDto, TicketTypeDto},
    },
    server::{
        error::AppError,
        model::{auth::AuthUser, ticket::TicketType},
        service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

/// List all ticket types.
#[utoipa::path(
    get,
    path = "/tickets/types",
    tag = TICKET_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All ticket types", body = Vec<TicketTypeDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let types = TicketService::new(&state.db).get_types().await?;

    Ok(Json(
        types
            .into_iter()
            .map(TicketType::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get the caller's ticket with its type.
///
/// # Returns
/// - `200 OK` - Ticket with its `TicketType`
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Caller has no enrollment or no ticket
#[utoipa::path(
    get,
    path = "/tickets",
    tag = TICKET_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User's ticket", body = TicketDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User has no ticket", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = TicketService::new(&state.db)
        .get_user_ticket(user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User has no ticket".to_string()))?;

    Ok(Json(ticket.into_dto()))
}

/// Reserve a ticket.
///
/// # Returns
/// - `201 Created` - Ticket reserved with status `RESERVED`
/// - `400 Bad Request` - Missing or malformed `ticketTypeId`
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Caller has no enrollment, or no such ticket type
#[utoipa::path(
    post,
    path = "/tickets",
    tag = TICKET_TAG,
    security(("bearer" = [])),
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket reserved", body = TicketDto),
        (status = 400, description = "Missing ticketTypeId", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Enrollment or ticket type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CreateTicketDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let ticket_type_id = payload
        .ok()
        .and_then(|Json(body)| body.ticket_type_id)
        .ok_or_else(|| AppError::BadRequest("ticketTypeId is required".to_string()))?;

    let ticket = TicketService::new(&state.db)
        .reserve(user.user_id, ticket_type_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ticket.into_dto())))
}
