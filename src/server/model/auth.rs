//! Authentication models shared by the auth middleware and its callers.

use serde::{Deserialize, Serialize};

/// Claims carried by the bearer token issued at sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// Id of the user the token was issued to.
    pub user_id: i32,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: usize,
}

/// Verified identity attached to every authenticated request.
///
/// Inserted into request extensions by the authentication middleware and read by
/// controllers through `Extension<AuthUser>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
}

/// A persisted sign-in session. A bearer token is only honoured while a session
/// row holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
}

impl Session {
    pub fn from_entity(entity: entity::session::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            token: entity.token,
        }
    }
}
