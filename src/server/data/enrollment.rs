use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::enrollment::Enrollment;

pub struct EnrollmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the enrollment of a user. Users have at most one.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Enrollment>, DbErr> {
        let enrollment = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(enrollment.map(Enrollment::from_entity))
    }
}
