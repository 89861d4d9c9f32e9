use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        payment::{PaymentDto, ProcessPaymentDto},
    },
    server::{
        error::AppError,
        model::{auth::AuthUser, payment::ProcessPaymentParams},
        service::payment::PaymentService,
        state::AppState,
        util::parse::parse_positive_id,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQuery {
    #[serde(default)]
    pub ticket_id: Option<String>,
}

/// Get the payment made for one of the caller's tickets.
///
/// # Returns
/// - `200 OK` - Payment for the ticket
/// - `400 Bad Request` - `ticketId` missing or not a positive integer
/// - `401 Unauthorized` - Ticket is not the caller's or has no payment
/// - `404 Not Found` - No such ticket
#[utoipa::path(
    get,
    path = "/payments",
    tag = PAYMENT_TAG,
    security(("bearer" = [])),
    params(
        ("ticketId" = i32, Query, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Payment for the ticket", body = PaymentDto),
        (status = 400, description = "Invalid ticketId", body = ErrorDto),
        (status = 401, description = "Payment not visible to the user", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<PaymentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ticket_id = query
        .ticket_id
        .as_deref()
        .and_then(parse_positive_id)
        .ok_or_else(|| AppError::BadRequest("A valid ticketId is required".to_string()))?;

    let payment = PaymentService::new(&state.db)
        .get_for_ticket(user.user_id, ticket_id)
        .await?;

    Ok(Json(payment.into_dto()))
}

/// Pay for one of the caller's tickets.
///
/// Records the payment at the ticket type's price, keeping only the card issuer and
/// the last four digits of the card number, and marks the ticket as `PAID`.
///
/// # Returns
/// - `200 OK` - Recorded payment
/// - `400 Bad Request` - Incomplete or malformed body
/// - `401 Unauthorized` - Ticket is not the caller's
/// - `404 Not Found` - No such ticket
#[utoipa::path(
    post,
    path = "/payments/process",
    tag = PAYMENT_TAG,
    security(("bearer" = [])),
    request_body = ProcessPaymentDto,
    responses(
        (status = 200, description = "Payment recorded", body = PaymentDto),
        (status = 400, description = "Incomplete payment data", body = ErrorDto),
        (status = 401, description = "Ticket does not belong to the user", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn process_payment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<ProcessPaymentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let params = ProcessPaymentParams::from_dto(user.user_id, payload);

    let payment = PaymentService::new(&state.db).process(params).await?;

    Ok(Json(payment.into_dto()))
}
