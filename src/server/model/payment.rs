//! Payment domain models.

use chrono::{DateTime, Utc};

use crate::model::payment::{PaymentDto, ProcessPaymentDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub ticket_id: i32,
    pub value: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            ticket_id: entity.ticket_id,
            value: entity.value,
            card_issuer: entity.card_issuer,
            card_last_digits: entity.card_last_digits,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            ticket_id: self.ticket_id,
            value: self.value,
            card_issuer: self.card_issuer,
            card_last_digits: self.card_last_digits,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for charging a ticket.
///
/// Only the card issuer and the last four digits of the card number survive the
/// conversion from the request body; the rest of the card data is dropped here.
#[derive(Debug, Clone)]
pub struct ProcessPaymentParams {
    pub user_id: i32,
    pub ticket_id: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
}

impl ProcessPaymentParams {
    pub fn from_dto(user_id: i32, dto: ProcessPaymentDto) -> Self {
        Self {
            user_id,
            ticket_id: dto.ticket_id,
            card_issuer: dto.card_data.issuer,
            card_last_digits: last_four_digits(dto.card_data.number),
        }
    }
}

/// Last four digits of a card number, left-padded with zeros for short numbers.
fn last_four_digits(number: u64) -> String {
    format!("{:04}", number % 10_000)
}
