//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! aggregate in the application. Repositories use SeaORM entity models internally and
//! return domain models to keep the data layer separate from business logic.
//!
//! Repositories are generic over `ConnectionTrait` so the same queries run either
//! directly on the connection pool or inside a `DatabaseTransaction` owned by a service.

pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod payment;
pub mod room;
pub mod session;
pub mod ticket;

#[cfg(test)]
mod test;
