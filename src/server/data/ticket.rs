use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::ticket::{Ticket, TicketStatus, TicketType, TicketWithType};

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all ticket types ordered by ID.
    pub async fn get_types(&self) -> Result<Vec<TicketType>, DbErr> {
        let types = entity::prelude::TicketType::find()
            .order_by_asc(entity::ticket_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(types.into_iter().map(TicketType::from_entity).collect())
    }

    pub async fn find_type_by_id(&self, id: i32) -> Result<Option<TicketType>, DbErr> {
        let ticket_type = entity::prelude::TicketType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(ticket_type.map(TicketType::from_entity))
    }

    /// Finds a ticket by ID joined with its ticket type.
    ///
    /// # Returns
    /// - `Ok(Some(TicketWithType))` - Ticket found
    /// - `Ok(None)` - No ticket with that ID
    /// - `Err(DbErr)` - Database error, missing ticket type or unknown status
    pub async fn find_with_type_by_id(&self, id: i32) -> Result<Option<TicketWithType>, DbErr> {
        let result = entity::prelude::Ticket::find_by_id(id)
            .find_also_related(entity::prelude::TicketType)
            .one(self.db)
            .await?;

        result.map(Self::join_type).transpose()
    }

    /// Finds the ticket belonging to an enrollment, joined with its ticket type.
    ///
    /// # Arguments
    /// - `enrollment_id` - Enrollment the ticket was issued to
    ///
    /// # Returns
    /// - `Ok(Some(TicketWithType))` - Ticket found (the oldest if several exist)
    /// - `Ok(None)` - Enrollment has no ticket
    /// - `Err(DbErr::RecordNotFound)` - Ticket references a missing ticket type
    /// - `Err(DbErr::Custom)` - Ticket has an unknown status
    pub async fn find_with_type_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<TicketWithType>, DbErr> {
        let result = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::EnrollmentId.eq(enrollment_id))
            .order_by_asc(entity::ticket::Column::Id)
            .find_also_related(entity::prelude::TicketType)
            .one(self.db)
            .await?;

        result.map(Self::join_type).transpose()
    }

    fn join_type(
        (ticket, ticket_type): (entity::ticket::Model, Option<entity::ticket_type::Model>),
    ) -> Result<TicketWithType, DbErr> {
        let ticket_type = ticket_type.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Ticket type {} of ticket {} not found",
                ticket.ticket_type_id, ticket.id
            ))
        })?;

        Ok(TicketWithType {
            ticket: Ticket::from_entity(ticket)?,
            ticket_type: TicketType::from_entity(ticket_type),
        })
    }

    /// Issues a new `RESERVED` ticket for an enrollment.
    ///
    /// # Arguments
    /// - `enrollment_id` - Enrollment the ticket is issued to
    /// - `ticket_type` - Type of the ticket, returned alongside the new ticket
    ///
    /// # Returns
    /// - `Ok(TicketWithType)` - Created ticket with its type
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        enrollment_id: i32,
        ticket_type: TicketType,
    ) -> Result<TicketWithType, DbErr> {
        let now = Utc::now();
        let ticket = entity::ticket::ActiveModel {
            ticket_type_id: ActiveValue::Set(ticket_type.id),
            enrollment_id: ActiveValue::Set(enrollment_id),
            status: ActiveValue::Set(TicketStatus::Reserved.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TicketWithType {
            ticket: Ticket::from_entity(ticket)?,
            ticket_type,
        })
    }

    /// Marks a ticket as `PAID`.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Updated ticket
    /// - `Err(DbErr::RecordNotFound)` - No ticket with that ID
    pub async fn mark_paid(&self, id: i32) -> Result<Ticket, DbErr> {
        let ticket = entity::prelude::Ticket::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Ticket with id {} not found", id)))?;

        let mut active_model: entity::ticket::ActiveModel = ticket.into();
        active_model.status = ActiveValue::Set(TicketStatus::Paid.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ticket::from_entity(active_model.update(self.db).await?)
    }
}
