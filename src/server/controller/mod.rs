//! HTTP request handlers.
//!
//! Controllers read the authenticated user and request input, call the matching
//! service, and convert domain models to DTOs. Status codes come from the `AppError`
//! each service returns.

pub mod booking;
pub mod health;
pub mod hotel;
pub mod payment;
pub mod ticket;

#[cfg(test)]
mod test;
