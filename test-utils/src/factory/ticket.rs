//! Ticket factory for creating test ticket entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating tickets.
///
/// Tickets default to status `"PAID"` since most tests exercise the flow after
/// payment; use `.status("RESERVED")` for an unpaid ticket.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: String,
}

impl<'a> TicketFactory<'a> {
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `enrollment_id` - ID of the owning enrollment
    /// - `ticket_type_id` - ID of an existing ticket type
    pub fn new(db: &'a DatabaseConnection, enrollment_id: i32, ticket_type_id: i32) -> Self {
        Self {
            db,
            enrollment_id,
            ticket_type_id,
            status: "PAID".to_string(),
        }
    }

    /// Sets the raw status column.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        let now = Utc::now();
        entity::ticket::ActiveModel {
            ticket_type_id: ActiveValue::Set(self.ticket_type_id),
            enrollment_id: ActiveValue::Set(self.enrollment_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a paid ticket for the enrollment.
pub async fn create_ticket(
    db: &DatabaseConnection,
    enrollment_id: i32,
    ticket_type_id: i32,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, enrollment_id, ticket_type_id)
        .build()
        .await
}
