use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::{
    hotel::{Hotel, HotelWithRooms},
    room::Room,
};

pub struct HotelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HotelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all hotels ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Hotel>, DbErr> {
        let hotels = entity::prelude::Hotel::find()
            .order_by_asc(entity::hotel::Column::Id)
            .all(self.db)
            .await?;

        Ok(hotels.into_iter().map(Hotel::from_entity).collect())
    }

    /// Gets a hotel by ID together with all of its rooms.
    ///
    /// # Arguments
    /// - `id` - Hotel ID to look up
    ///
    /// # Returns
    /// - `Ok(Some(HotelWithRooms))` - Hotel found; rooms ordered by ID, possibly empty
    /// - `Ok(None)` - No hotel with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_rooms(&self, id: i32) -> Result<Option<HotelWithRooms>, DbErr> {
        let Some(hotel) = entity::prelude::Hotel::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel.id))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(HotelWithRooms {
            hotel: Hotel::from_entity(hotel),
            rooms: rooms.into_iter().map(Room::from_entity).collect(),
        }))
    }
}
