//! Booking factory for creating test booking entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a booking of `room_id` for `user_id`.
///
/// Room capacity is left as is; adjust it through `RoomFactory::capacity` when a
/// test needs the two to agree.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of an existing user
/// - `room_id` - ID of an existing room
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    room_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    let now = Utc::now();
    entity::booking::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        room_id: ActiveValue::Set(room_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
