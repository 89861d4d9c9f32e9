//! SeaORM entity models for every persisted table.
//!
//! Each module mirrors one table created by the `migration` crate. Relations are
//! declared here so that repositories can use `find_also_related` and so that the
//! test schema generated from entities carries the same foreign keys.

pub mod prelude;

pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod payment;
pub mod room;
pub mod session;
pub mod ticket;
pub mod ticket_type;
pub mod user;
