use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        enrollment::EnrollmentRepository, payment::PaymentRepository, ticket::TicketRepository,
    },
    error::AppError,
    model::{
        payment::{Payment, ProcessPaymentParams},
        ticket::TicketWithType,
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the payment made for a ticket the user owns.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Payment for the ticket
    /// - `Err(AppError::NotFound)` - Ticket does not exist
    /// - `Err(AppError::Unauthorized)` - Ticket is not the user's, or it has no payment
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn get_for_ticket(&self, user_id: i32, ticket_id: i32) -> Result<Payment, AppError> {
        self.owned_ticket(user_id, ticket_id).await?;

        PaymentRepository::new(self.db)
            .find_by_ticket_id(ticket_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("No payment found for ticket".to_string()))
    }

    /// Charges a ticket and marks it as paid.
    ///
    /// The payment value is the ticket type's price. The payment insert and the status
    /// change run in one transaction.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Recorded payment
    /// - `Err(AppError::NotFound)` - Ticket does not exist
    /// - `Err(AppError::Unauthorized)` - Ticket is not the user's
    /// - `Err(AppError::DbErr)` - Database error; the transaction was rolled back
    pub async fn process(&self, params: ProcessPaymentParams) -> Result<Payment, AppError> {
        let ticket = self.owned_ticket(params.user_id, params.ticket_id).await?;

        let txn = self.db.begin().await?;

        let payment = PaymentRepository::new(&txn)
            .create(&params, ticket.ticket_type.price)
            .await?;
        TicketRepository::new(&txn).mark_paid(ticket.ticket.id).await?;

        txn.commit().await?;

        tracing::info!(
            "Processed payment {} of {} for ticket {}",
            payment.id,
            payment.value,
            payment.ticket_id
        );

        Ok(payment)
    }

    /// Loads a ticket and checks it was issued to the user's enrollment.
    async fn owned_ticket(&self, user_id: i32, ticket_id: i32) -> Result<TicketWithType, AppError> {
        let ticket = TicketRepository::new(self.db)
            .find_with_type_by_id(ticket_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

        let enrollment = EnrollmentRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?;

        match enrollment {
            Some(enrollment) if enrollment.id == ticket.ticket.enrollment_id => Ok(ticket),
            _ => Err(AppError::Unauthorized(
                "Ticket does not belong to user".to_string(),
            )),
        }
    }
}
