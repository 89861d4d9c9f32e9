//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{self, ticket::TicketFactory, ticket_type::TicketTypeFactory};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user entitled to book a room.
///
/// This is a convenience method that creates:
/// 1. User
/// 2. Enrollment for the user
/// 3. In-person ticket type that includes a hotel
/// 4. Paid ticket of that type
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, enrollment, ticket_type, ticket))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_hotel_ticket(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::enrollment::Model,
        entity::ticket_type::Model,
        entity::ticket::Model,
    ),
    DbErr,
> {
    create_user_with_ticket(db, TicketTypeFactory::new(db), "PAID").await
}

/// Creates a user with an enrollment and a ticket built from the given type factory.
///
/// Use this to set up users whose ticket should fail a rule, e.g. a remote ticket
/// type or a `"RESERVED"` status.
///
/// # Arguments
/// - `db` - Database connection
/// - `ticket_type` - Configured ticket type factory
/// - `status` - Raw ticket status
///
/// # Returns
/// - `Ok((user, enrollment, ticket_type, ticket))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_ticket(
    db: &DatabaseConnection,
    ticket_type: TicketTypeFactory<'_>,
    status: &str,
) -> Result<
    (
        entity::user::Model,
        entity::enrollment::Model,
        entity::ticket_type::Model,
        entity::ticket::Model,
    ),
    DbErr,
> {
    let user = factory::user::create_user(db).await?;
    let enrollment = factory::enrollment::create_enrollment(db, user.id).await?;
    let ticket_type = ticket_type.build().await?;
    let ticket = TicketFactory::new(db, enrollment.id, ticket_type.id)
        .status(status)
        .build()
        .await?;

    Ok((user, enrollment, ticket_type, ticket))
}

/// Creates a hotel with a single room of the given capacity.
///
/// # Returns
/// - `Ok((hotel, room))` - Created hotel and room
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hotel_with_room(
    db: &DatabaseConnection,
    capacity: i32,
) -> Result<(entity::hotel::Model, entity::room::Model), DbErr> {
    let hotel = factory::hotel::create_hotel(db).await?;
    let room = factory::room::create_room(db, hotel.id, capacity).await?;

    Ok((hotel, room))
}
