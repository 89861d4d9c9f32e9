use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    booking::{Booking, BookingWithRoom},
    room::Room,
};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the booking held by a user.
    ///
    /// One booking per user is assumed but not enforced; the oldest one wins.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_asc(entity::booking::Column::Id)
            .one(self.db)
            .await?;

        Ok(booking.map(Booking::from_entity))
    }

    /// Finds the booking held by a user together with the room it occupies.
    ///
    /// # Returns
    /// - `Ok(Some(BookingWithRoom))` - Booking found
    /// - `Ok(None)` - User has no booking
    /// - `Err(DbErr::RecordNotFound)` - Booking references a room that no longer exists
    pub async fn find_with_room_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<BookingWithRoom>, DbErr> {
        let result = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_asc(entity::booking::Column::Id)
            .find_also_related(entity::prelude::Room)
            .one(self.db)
            .await?;

        match result {
            Some((booking, Some(room))) => Ok(Some(BookingWithRoom {
                id: booking.id,
                room: Room::from_entity(room),
            })),
            Some((booking, None)) => Err(DbErr::RecordNotFound(format!(
                "Room {} of booking {} not found",
                booking.room_id, booking.id
            ))),
            None => Ok(None),
        }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(booking.map(Booking::from_entity))
    }

    /// Inserts a booking of `room_id` for `user_id`. Room capacity is not touched.
    pub async fn create(&self, user_id: i32, room_id: i32) -> Result<Booking, DbErr> {
        let now = Utc::now();
        let booking = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            room_id: ActiveValue::Set(room_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(booking))
    }

    /// Points an existing booking at another room. Room capacities are not touched.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Updated booking
    /// - `Err(DbErr::RecordNotFound)` - No booking with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_room(&self, id: i32, room_id: i32) -> Result<Booking, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Booking with id {} not found", id)))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.room_id = ActiveValue::Set(room_id);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let booking = active_model.update(self.db).await?;

        Ok(Booking::from_entity(booking))
    }
}
