//! Enrollment domain model.

use chrono::{DateTime, Utc};

/// A user's registration record. Required before tickets can be bought.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub cpf: String,
    pub birthday: DateTime<Utc>,
    pub phone: String,
}

impl Enrollment {
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            cpf: entity.cpf,
            birthday: entity.birthday,
            phone: entity.phone,
        }
    }
}
