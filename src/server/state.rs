//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler and middleware through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `DatabaseConnection` is a connection pool and the secret is
/// reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HMAC secret bearer tokens are verified against.
    pub jwt_secret: Arc<str>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt_secret` - Secret used to verify bearer tokens
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            db,
            jwt_secret: jwt_secret.into(),
        }
    }
}
