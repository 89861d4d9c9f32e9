use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        booking::{create_booking, get_booking, update_booking},
        health::health,
        hotel::{get_hotel_rooms, get_hotels},
        payment::{get_payment, process_payment},
        ticket::{create_ticket, get_ticket, get_ticket_types},
    },
    doc::ApiDoc,
    middleware::{auth::authenticate, hotel::require_hotel_access},
    state::AppState,
};

/// Builds the application router.
///
/// Every API route sits behind `authenticate`; hotel routes additionally sit behind
/// `require_hotel_access`, which runs after authentication. `/health` and the
/// Swagger UI are public.
pub fn router(state: AppState) -> Router {
    let hotels = Router::new()
        .route("/hotels", get(get_hotels))
        .route("/hotels/{hotel_id}", get(get_hotel_rooms))
        .route_layer(from_fn_with_state(state.clone(), require_hotel_access));

    let protected = Router::new()
        .route("/booking", get(get_booking).post(create_booking))
        .route("/booking/{booking_id}", put(update_booking))
        .route("/tickets/types", get(get_ticket_types))
        .route("/tickets", get(get_ticket).post(create_ticket))
        .route("/payments", get(get_payment))
        .route("/payments/process", post(process_payment))
        .merge(hotels)
        .route_layer(from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/health", get(health))
        .merge(protected)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
