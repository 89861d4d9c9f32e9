//! Room domain model.

use chrono::{DateTime, Utc};

use crate::model::hotel::RoomDto;

/// A hotel room and its remaining capacity.
///
/// `version` is the value observed when the room was read. Capacity changes are
/// only applied if the stored version still matches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Converts an entity model to a room domain model at the repository boundary.
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            capacity: entity.capacity,
            hotel_id: entity.hotel_id,
            version: entity.version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether at least one slot is free.
    pub fn has_vacancy(&self) -> bool {
        self.capacity > 0
    }

    /// Converts the room to a DTO for API responses. The version is not exposed.
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            name: self.name,
            capacity: self.capacity,
            hotel_id: self.hotel_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
