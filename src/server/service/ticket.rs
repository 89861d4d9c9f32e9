use sea_orm::DatabaseConnection;

use crate::server::{
    data::{enrollment::EnrollmentRepository, ticket::TicketRepository},
    error::AppError,
    model::ticket::{TicketType, TicketWithType},
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_types(&self) -> Result<Vec<TicketType>, AppError> {
        Ok(TicketRepository::new(self.db).get_types().await?)
    }

    /// Gets the ticket of a user with its type.
    ///
    /// # Returns
    /// - `Ok(Some(TicketWithType))` - User's ticket
    /// - `Ok(None)` - User has no enrollment or no ticket
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn get_user_ticket(&self, user_id: i32) -> Result<Option<TicketWithType>, AppError> {
        let Some(enrollment) = EnrollmentRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(TicketRepository::new(self.db)
            .find_with_type_by_enrollment_id(enrollment.id)
            .await?)
    }

    /// Reserves a ticket of the given type for a user.
    ///
    /// # Arguments
    /// - `user_id` - Authenticated user
    /// - `ticket_type_id` - Type of ticket to reserve
    ///
    /// # Returns
    /// - `Ok(TicketWithType)` - New `RESERVED` ticket
    /// - `Err(AppError::NotFound)` - User has no enrollment or the ticket type does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn reserve(
        &self,
        user_id: i32,
        ticket_type_id: i32,
    ) -> Result<TicketWithType, AppError> {
        let enrollment = EnrollmentRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User has no enrollment".to_string()))?;

        let repo = TicketRepository::new(self.db);
        let ticket_type = repo
            .find_type_by_id(ticket_type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket type not found".to_string()))?;

        let ticket = repo.create(enrollment.id, ticket_type).await?;

        tracing::info!(
            "Reserved ticket {} of type {} for user {}",
            ticket.ticket.id,
            ticket_type_id,
            user_id
        );

        Ok(ticket)
    }
}
