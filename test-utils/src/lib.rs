//! Eventhub Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! ticketing and booking backend. This crate offers a builder pattern for creating test
//! contexts with in-memory SQLite databases, factories for inserting rows with sensible
//! defaults, and helpers for minting bearer tokens backed by real session rows.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories and dependency helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_room() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_booking_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
//!     let token = test.token_for(user.id).await?;
//!     // Drive the router with `Authorization: Bearer {token}`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

/// Secret used to sign every token minted by the test utilities.
///
/// Application state under test must be built with the same secret for the
/// authentication middleware to accept those tokens.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";
