//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing booking, hotel access and payment rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Owning the transactions of multi-step writes

pub mod booking;
pub mod hotel;
pub mod payment;
pub mod ticket;

#[cfg(test)]
mod test;
