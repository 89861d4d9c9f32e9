//! Session factory for creating sessions that hold signed bearer tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use serde::Serialize;

use crate::{error::TestError, TEST_JWT_SECRET};

/// Token claims in the shape the server's authentication middleware expects.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    user_id: i32,
    exp: usize,
}

/// Signs an HS256 token for a user, valid for one hour.
///
/// # Arguments
/// - `user_id` - User the token identifies
/// - `secret` - Signing secret
///
/// # Returns
/// - `Ok(String)` - Encoded token
/// - `Err(jsonwebtoken::errors::Error)` - Signing failed
pub fn sign_token(user_id: i32, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        user_id,
        exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Factory for creating sessions.
///
/// The token defaults to one signed with `TEST_JWT_SECRET` for the session's user.
/// Override it to store tokens the middleware should reject.
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: Option<String>,
}

impl<'a> SessionFactory<'a> {
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of an existing user
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: None,
        }
    }

    /// Stores `token` verbatim instead of signing a fresh one.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Builds and inserts the session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::session::Model)` - Created session
    /// - `Err(TestError::Token)` - Signing the default token failed
    /// - `Err(TestError::Database)` - Database error during insert
    pub async fn build(self) -> Result<entity::session::Model, TestError> {
        let token = match self.token {
            Some(token) => token,
            None => sign_token(self.user_id, TEST_JWT_SECRET)?,
        };

        let now = Utc::now();
        let session = entity::session::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            token: ActiveValue::Set(token),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(session)
    }
}

/// Creates a session with a freshly signed token for the user.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::session::Model, TestError> {
    SessionFactory::new(db, user_id).build().await
}
