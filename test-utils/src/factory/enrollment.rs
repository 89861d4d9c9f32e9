//! Enrollment factory for creating test enrollment entities.

use crate::factory::helpers::next_id;
use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating enrollments.
///
/// Defaults:
/// - name: `"Enrollee {id}"`
/// - cpf: 11-digit string unique per factory
/// - birthday: 1990-01-01
/// - phone: `"(21) 98999-9999"`
pub struct EnrollmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    cpf: String,
    phone: String,
}

impl<'a> EnrollmentFactory<'a> {
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of an existing user without an enrollment
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Enrollee {}", id),
            cpf: format!("{:011}", id),
            phone: "(21) 98999-9999".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::enrollment::Model, DbErr> {
        let now = Utc::now();
        let birthday = Utc
            .with_ymd_and_hms(1990, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or(now);

        entity::enrollment::ActiveModel {
            name: ActiveValue::Set(self.name),
            cpf: ActiveValue::Set(self.cpf),
            birthday: ActiveValue::Set(birthday),
            phone: ActiveValue::Set(self.phone),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enrollment with default values for the user.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    EnrollmentFactory::new(db, user_id).build().await
}
