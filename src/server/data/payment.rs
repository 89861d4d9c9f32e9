use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::payment::{Payment, ProcessPaymentParams};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the payment made for a ticket, oldest first if several exist.
    pub async fn find_by_ticket_id(&self, ticket_id: i32) -> Result<Option<Payment>, DbErr> {
        let payment = entity::prelude::Payment::find()
            .filter(entity::payment::Column::TicketId.eq(ticket_id))
            .order_by_asc(entity::payment::Column::Id)
            .one(self.db)
            .await?;

        Ok(payment.map(Payment::from_entity))
    }

    /// Records a payment of `value` for the ticket named in `params`.
    ///
    /// The ticket's status is not changed here.
    pub async fn create(&self, params: &ProcessPaymentParams, value: i32) -> Result<Payment, DbErr> {
        let now = Utc::now();
        let payment = entity::payment::ActiveModel {
            ticket_id: ActiveValue::Set(params.ticket_id),
            value: ActiveValue::Set(value),
            card_issuer: ActiveValue::Set(params.card_issuer.clone()),
            card_last_digits: ActiveValue::Set(params.card_last_digits.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(payment))
    }
}
