//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod auth;
pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod payment;
pub mod room;
pub mod ticket;
