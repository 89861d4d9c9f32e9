//! OpenAPI documentation configuration.
//!
//! `ApiDoc` collects every annotated handler and DTO schema into one document,
//! served by Swagger UI under `/api/docs`.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::model::{
    api::ErrorDto,
    booking::{BookingDto, BookingIdDto, BookingRequestDto},
    hotel::{HotelDto, HotelWithRoomsDto, RoomDto},
    payment::{CardDataDto, PaymentDto, ProcessPaymentDto},
    ticket::{CreateTicketDto, TicketDto, TicketTypeDto},
};

/// Registers the bearer token scheme referenced by every protected route.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&BearerAuth),
    info(
        title = "Eventhub API",
        description = "Event tickets, payments and hotel bookings."
    ),
    paths(
        crate::server::controller::booking::get_booking,
        crate::server::controller::booking::create_booking,
        crate::server::controller::booking::update_booking,
        crate::server::controller::hotel::get_hotels,
        crate::server::controller::hotel::get_hotel_rooms,
        crate::server::controller::ticket::get_ticket_types,
        crate::server::controller::ticket::get_ticket,
        crate::server::controller::ticket::create_ticket,
        crate::server::controller::payment::get_payment,
        crate::server::controller::payment::process_payment,
        crate::server::controller::health::health,
    ),
    components(schemas(
        ErrorDto,
        BookingDto,
        BookingIdDto,
        BookingRequestDto,
        HotelDto,
        HotelWithRoomsDto,
        RoomDto,
        TicketTypeDto,
        TicketDto,
        CreateTicketDto,
        PaymentDto,
        CardDataDto,
        ProcessPaymentDto,
    )),
    tags(
        (name = "booking", description = "Room bookings"),
        (name = "hotel", description = "Hotels and their rooms"),
        (name = "ticket", description = "Ticket types and reservations"),
        (name = "payment", description = "Ticket payments"),
        (name = "health", description = "Health checks")
    )
)]
pub struct ApiDoc;
