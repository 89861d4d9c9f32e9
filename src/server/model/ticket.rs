//! Ticket and ticket type domain models.
//!
//! Tickets are stored with a textual status column. `TicketStatus` is the closed
//! set of values the application understands; anything else read from the database
//! is reported as a `DbErr::Custom` at the repository boundary.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::model::ticket::{TicketDto, TicketTypeDto};

/// Payment status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    /// Issued but not paid yet.
    Reserved,
    /// Paid through the payment flow.
    Paid,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reserved => "RESERVED",
            Self::Paid => "PAID",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = DbErr;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "RESERVED" => Ok(Self::Reserved),
            "PAID" => Ok(Self::Paid),
            other => Err(DbErr::Custom(format!("Unknown ticket status: {}", other))),
        }
    }
}

/// Purchasable ticket category.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    /// Price in minor currency units.
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TicketType {
    pub fn from_entity(entity: entity::ticket_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            is_remote: entity.is_remote,
            includes_hotel: entity.includes_hotel,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TicketTypeDto {
        TicketTypeDto {
            id: self.id,
            name: self.name,
            price: self.price,
            is_remote: self.is_remote,
            includes_hotel: self.includes_hotel,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Converts an entity model to a ticket domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a known `TicketStatus`
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            ticket_type_id: entity.ticket_type_id,
            enrollment_id: entity.enrollment_id,
            status: entity.status.parse()?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Ticket joined with its type.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketWithType {
    pub ticket: Ticket,
    pub ticket_type: TicketType,
}

impl TicketWithType {
    /// Whether this ticket entitles its holder to a hotel room: paid, in person and
    /// with a hotel stay included.
    pub fn grants_hotel_stay(&self) -> bool {
        self.ticket.status == TicketStatus::Paid
            && !self.ticket_type.is_remote
            && self.ticket_type.includes_hotel
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.ticket.id,
            status: self.ticket.status.to_string(),
            ticket_type_id: self.ticket.ticket_type_id,
            enrollment_id: self.ticket.enrollment_id,
            created_at: self.ticket.created_at,
            updated_at: self.ticket.updated_at,
            ticket_type: self.ticket_type.into_dto(),
        }
    }
}
