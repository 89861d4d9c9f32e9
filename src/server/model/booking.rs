//! Booking domain models.

use chrono::{DateTime, Utc};

use crate::{model::booking::BookingDto, server::model::room::Room};

/// A user's reservation of one room.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            room_id: entity.room_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Booking joined with the room it occupies, as returned by `GET /booking`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithRoom {
    pub id: i32,
    pub room: Room,
}

impl BookingWithRoom {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            room: self.room.into_dto(),
        }
    }
}

/// Parameters for moving an existing booking to another room.
#[derive(Debug, Clone)]
pub struct MoveBookingParams {
    /// Booking being moved.
    pub booking_id: i32,
    /// Room the booking currently occupies.
    pub old_room_id: i32,
    /// Target room as observed by the availability check.
    pub new_room: Room,
}
