use super::*;
use crate::server::{
    error::booking::BookingError, model::booking::MoveBookingParams,
    service::booking::BookingService,
};
use test_utils::factory::{helpers::create_user_with_ticket, ticket_type::TicketTypeFactory};

mod check_business_rule;
mod check_room_availability;
mod create_booking;
mod update_booking;

/// Reads a room's stored capacity.
async fn capacity_of(db: &sea_orm::DatabaseConnection, room_id: i32) -> Result<i32, DbErr> {
    let room = entity::prelude::Room::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Room {}", room_id)))?;

    Ok(room.capacity)
}
