use chrono::Utc;
use sea_orm::{sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::room::Room;

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a room by its ID.
    ///
    /// # Arguments
    /// - `id` - Room ID to look up
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Room found, including its current version
    /// - `Ok(None)` - No room with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let room = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(room.map(Room::from_entity))
    }

    /// Changes a room's capacity by `delta` if nobody else touched it since it was read.
    ///
    /// Performs a compare-and-set on `(id, version)`: the new capacity is computed from
    /// the observed room and written together with `version + 1` only while the stored
    /// version still equals `room.version`. A resulting negative capacity is never
    /// written.
    ///
    /// # Arguments
    /// - `room` - Room as observed by the caller
    /// - `delta` - Signed change to apply (`-1` to occupy a slot, `1` to free one)
    ///
    /// # Returns
    /// - `Ok(true)` - Capacity updated
    /// - `Ok(false)` - Room was changed concurrently, or the change would make
    ///   capacity negative; nothing was written
    /// - `Err(DbErr)` - Database error during update
    pub async fn adjust_capacity(&self, room: &Room, delta: i32) -> Result<bool, DbErr> {
        let new_capacity = room.capacity + delta;
        if new_capacity < 0 {
            return Ok(false);
        }

        let result = entity::prelude::Room::update_many()
            .col_expr(entity::room::Column::Capacity, Expr::value(new_capacity))
            .col_expr(entity::room::Column::Version, Expr::value(room.version + 1))
            .col_expr(entity::room::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::room::Column::Id.eq(room.id))
            .filter(entity::room::Column::Version.eq(room.version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
