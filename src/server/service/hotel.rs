use sea_orm::DatabaseConnection;

use crate::server::{
    data::{enrollment::EnrollmentRepository, hotel::HotelRepository, ticket::TicketRepository},
    error::{hotel::HotelAccessError, AppError},
    model::{
        hotel::{Hotel, HotelWithRooms},
        ticket::TicketStatus,
    },
};

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks that a user's ticket lets them browse hotels.
    ///
    /// Checks run in order and the first failure wins: enrollment, ticket, payment
    /// status, then whether the ticket type is in person and includes a hotel.
    ///
    /// # Arguments
    /// - `user_id` - Authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User may see hotels
    /// - `Err(HotelAccessError)` - Reason access was denied
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn check_access(&self, user_id: i32) -> Result<(), AppError> {
        let enrollment = EnrollmentRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or(HotelAccessError::EnrollmentNotFound)?;

        let ticket = TicketRepository::new(self.db)
            .find_with_type_by_enrollment_id(enrollment.id)
            .await?
            .ok_or(HotelAccessError::TicketNotFound)?;

        if ticket.ticket.status != TicketStatus::Paid {
            return Err(HotelAccessError::TicketNotPaid.into());
        }

        if ticket.ticket_type.is_remote || !ticket.ticket_type.includes_hotel {
            return Err(HotelAccessError::HotelNotIncluded.into());
        }

        Ok(())
    }

    pub async fn get_all(&self) -> Result<Vec<Hotel>, AppError> {
        Ok(HotelRepository::new(self.db).get_all().await?)
    }

    /// Gets a hotel with its rooms.
    ///
    /// # Returns
    /// - `Ok(HotelWithRooms)` - Hotel and its rooms
    /// - `Err(AppError::BadRequest)` - No hotel with that ID
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn get_with_rooms(&self, hotel_id: i32) -> Result<HotelWithRooms, AppError> {
        HotelRepository::new(self.db)
            .find_with_rooms(hotel_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("This Id has no Hotel".to_string()))
    }
}
