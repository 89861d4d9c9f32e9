//! Request and response bodies exchanged over HTTP.
//!
//! DTOs are serialized in camelCase, with related records nested under a
//! capitalized key (`Room`, `Rooms`, `TicketType`) to match the public API.

pub mod api;
pub mod booking;
pub mod hotel;
pub mod payment;
pub mod ticket;
