//! Hotel domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::hotel::{HotelDto, HotelWithRoomsDto},
    server::model::room::Room,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hotel {
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image: entity.image,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Hotel together with all of its rooms, ordered by room id.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

impl HotelWithRooms {
    pub fn into_dto(self) -> HotelWithRoomsDto {
        HotelWithRoomsDto {
            id: self.hotel.id,
            name: self.hotel.name,
            image: self.hotel.image,
            created_at: self.hotel.created_at,
            updated_at: self.hotel.updated_at,
            rooms: self.rooms.into_iter().map(Room::into_dto).collect(),
        }
    }
}
