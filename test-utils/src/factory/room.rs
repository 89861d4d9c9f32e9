//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating rooms with customizable capacity.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room::RoomFactory;
///
/// let full_room = RoomFactory::new(&db, hotel.id)
///     .capacity(0)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    name: String,
    capacity: i32,
    version: i32,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - name: `"{id}"`
    /// - capacity: `3`
    /// - version: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `hotel_id` - ID of the hotel the room belongs to
    ///
    /// # Returns
    /// - `RoomFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id,
            name: id.to_string(),
            capacity: 3,
            version: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the number of free slots.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();
        entity::room::ActiveModel {
            name: ActiveValue::Set(self.name),
            capacity: ActiveValue::Set(self.capacity),
            hotel_id: ActiveValue::Set(self.hotel_id),
            version: ActiveValue::Set(self.version),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with the given capacity in the hotel.
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: i32,
    capacity: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).capacity(capacity).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_room_with_capacity() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Hotel)
            .with_table(Room)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let hotel = factory::create_hotel(db).await?;
        let room = create_room(db, hotel.id, 2).await?;

        assert_eq!(room.hotel_id, hotel.id);
        assert_eq!(room.capacity, 2);
        assert_eq!(room.version, 0);

        Ok(())
    }
}
