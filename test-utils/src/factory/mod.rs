//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the IDs of the rows they reference, and
//! the `helpers` module builds whole dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::create_user(db).await?;
//! let (hotel, room) = factory::helpers::create_hotel_with_room(db, 3).await?;
//!
//! // User with an enrollment and a paid, in-person ticket that includes a hotel
//! let (user, enrollment, ticket_type, ticket) =
//!     factory::helpers::create_user_with_hotel_ticket(db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let ticket_type = factory::ticket_type::TicketTypeFactory::new(db)
//!     .remote(true)
//!     .includes_hotel(false)
//!     .build()
//!     .await?;
//!
//! let room = factory::room::RoomFactory::new(db, hotel.id)
//!     .capacity(0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `session` - Create sessions holding signed bearer tokens
//! - `enrollment` - Create enrollment entities
//! - `ticket_type` - Create ticket type entities
//! - `ticket` - Create ticket entities
//! - `payment` - Create payment entities
//! - `hotel` - Create hotel entities
//! - `room` - Create room entities
//! - `booking` - Create booking entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod enrollment;
pub mod helpers;
pub mod hotel;
pub mod payment;
pub mod room;
pub mod session;
pub mod ticket;
pub mod ticket_type;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use enrollment::create_enrollment;
pub use hotel::create_hotel;
pub use payment::create_payment;
pub use room::create_room;
pub use session::create_session;
pub use ticket::create_ticket;
pub use ticket_type::create_ticket_type;
pub use user::create_user;
