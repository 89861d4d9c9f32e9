//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating hotels.
///
/// Defaults:
/// - name: `"Hotel {id}"`
/// - image: `"https://example.com/hotel-{id}.png"`
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    image: String,
}

impl<'a> HotelFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hotel {}", id),
            image: format!("https://example.com/hotel-{}.png", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        let now = Utc::now();
        entity::hotel::ActiveModel {
            name: ActiveValue::Set(self.name),
            image: ActiveValue::Set(self.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}
