//! Payment factory for creating test payment entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating payments.
///
/// Defaults:
/// - value: `600`
/// - card_issuer: `"VISA"`
/// - card_last_digits: `"1234"`
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    ticket_id: i32,
    value: i32,
    card_issuer: String,
    card_last_digits: String,
}

impl<'a> PaymentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, ticket_id: i32) -> Self {
        Self {
            db,
            ticket_id,
            value: 600,
            card_issuer: "VISA".to_string(),
            card_last_digits: "1234".to_string(),
        }
    }

    pub fn value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    pub fn card_issuer(mut self, card_issuer: impl Into<String>) -> Self {
        self.card_issuer = card_issuer.into();
        self
    }

    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        let now = Utc::now();
        entity::payment::ActiveModel {
            ticket_id: ActiveValue::Set(self.ticket_id),
            value: ActiveValue::Set(self.value),
            card_issuer: ActiveValue::Set(self.card_issuer),
            card_last_digits: ActiveValue::Set(self.card_last_digits),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_payment(
    db: &DatabaseConnection,
    ticket_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, ticket_id).build().await
}
