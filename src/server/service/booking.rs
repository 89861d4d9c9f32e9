use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        booking::BookingRepository, enrollment::EnrollmentRepository, room::RoomRepository,
        ticket::TicketRepository,
    },
    error::{booking::BookingError, AppError},
    model::{
        booking::{Booking, BookingWithRoom, MoveBookingParams},
        room::Room,
    },
};

/// Message returned when a room changed between the availability check and the write.
const STALE_ROOM: &str = "Room was modified by another request, try again";

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks that a room exists and has a free slot.
    ///
    /// # Arguments
    /// - `room_id` - ID of the room to book
    ///
    /// # Returns
    /// - `Ok(Room)` - Room as observed, including the version later writes are guarded by
    /// - `Err(BookingError::RoomNotFound)` - No room with that ID
    /// - `Err(BookingError::FullRoom)` - Room capacity is zero
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn check_room_availability(&self, room_id: i32) -> Result<Room, AppError> {
        let room = RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or(BookingError::RoomNotFound)?;

        if !room.has_vacancy() {
            return Err(BookingError::FullRoom.into());
        }

        Ok(room)
    }

    /// Checks that a user may book a room at all.
    ///
    /// The user needs an enrollment with a ticket that is paid, in person and includes
    /// a hotel stay.
    ///
    /// # Returns
    /// - `Ok(())` - User is entitled to a booking
    /// - `Err(BookingError::BusinessRuleViolation)` - Any link of the chain is missing or
    ///   the ticket does not qualify
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn check_business_rule(&self, user_id: i32) -> Result<(), AppError> {
        let enrollment = EnrollmentRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or(BookingError::BusinessRuleViolation)?;

        let ticket = TicketRepository::new(self.db)
            .find_with_type_by_enrollment_id(enrollment.id)
            .await?
            .ok_or(BookingError::BusinessRuleViolation)?;

        if !ticket.grants_hotel_stay() {
            return Err(BookingError::BusinessRuleViolation.into());
        }

        Ok(())
    }

    /// Checks that a user may move a booking: they must already hold one.
    ///
    /// # Returns
    /// - `Ok(())` - User has a booking
    /// - `Err(BookingError::BusinessRuleViolation)` - User has no booking
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn check_update_business_rule(&self, user_id: i32) -> Result<(), AppError> {
        BookingRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or(BookingError::BusinessRuleViolation)?;

        Ok(())
    }

    /// Books `room` for a user, taking one slot of its capacity.
    ///
    /// Runs in a single transaction: the capacity decrement is a compare-and-set on the
    /// room version observed by `check_room_availability`, followed by the booking
    /// insert. Nothing is committed if either step fails.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user making the booking
    /// - `room` - Room returned by `check_room_availability`
    ///
    /// # Returns
    /// - `Ok(Booking)` - Created booking
    /// - `Err(AppError::Conflict)` - Room changed since it was observed
    /// - `Err(AppError::DbErr)` - Database error; the transaction was rolled back
    pub async fn create_booking(&self, user_id: i32, room: Room) -> Result<Booking, AppError> {
        let txn = self.db.begin().await?;

        if !RoomRepository::new(&txn).adjust_capacity(&room, -1).await? {
            txn.rollback().await?;
            return Err(AppError::Conflict(STALE_ROOM.to_string()));
        }

        let booking = BookingRepository::new(&txn).create(user_id, room.id).await?;

        txn.commit().await?;

        tracing::info!(
            "User {} booked room {} (booking {})",
            user_id,
            room.id,
            booking.id
        );

        Ok(booking)
    }

    /// Moves a booking to another room.
    ///
    /// Runs in a single transaction: frees one slot of the old room, takes one slot of
    /// the new room guarded by the version observed by `check_room_availability`, then
    /// points the booking at the new room.
    ///
    /// # Arguments
    /// - `params` - Booking to move, its current room and the observed target room
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the moved booking
    /// - `Err(BookingError::RoomNotFound)` - Old room no longer exists
    /// - `Err(AppError::Conflict)` - Either room changed concurrently
    /// - `Err(AppError::DbErr)` - Database error; the transaction was rolled back
    pub async fn update_booking(&self, params: MoveBookingParams) -> Result<i32, AppError> {
        let txn = self.db.begin().await?;
        let room_repo = RoomRepository::new(&txn);

        let Some(old_room) = room_repo.find_by_id(params.old_room_id).await? else {
            txn.rollback().await?;
            return Err(BookingError::RoomNotFound.into());
        };

        if !room_repo.adjust_capacity(&old_room, 1).await?
            || !room_repo.adjust_capacity(&params.new_room, -1).await?
        {
            txn.rollback().await?;
            return Err(AppError::Conflict(STALE_ROOM.to_string()));
        }

        let booking = BookingRepository::new(&txn)
            .update_room(params.booking_id, params.new_room.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Moved booking {} from room {} to room {}",
            booking.id,
            params.old_room_id,
            params.new_room.id
        );

        Ok(booking.id)
    }

    /// Gets the booking held by a user together with its room.
    pub async fn get_booking(&self, user_id: i32) -> Result<Option<BookingWithRoom>, AppError> {
        Ok(BookingRepository::new(self.db)
            .find_with_room_by_user_id(user_id)
            .await?)
    }

    pub async fn get_booking_by_id(&self, booking_id: i32) -> Result<Option<Booking>, AppError> {
        Ok(BookingRepository::new(self.db).find_by_id(booking_id).await?)
    }
}
