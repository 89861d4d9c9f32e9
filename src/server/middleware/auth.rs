use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::session::SessionRepository,
    error::{auth::AuthError, AppError},
    model::auth::{AuthUser, TokenClaims},
    state::AppState,
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str) -> Self {
        Self { db, jwt_secret }
    }

    /// Verifies a bearer token and resolves the user it belongs to.
    ///
    /// The token must carry a valid HS256 signature, must not be expired, and must be
    /// held by a session of the same user.
    ///
    /// # Arguments
    /// - `token` - Raw token without the `Bearer ` prefix
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Verified user
    /// - `Err(AuthError::InvalidToken)` - Signature or expiry check failed
    /// - `Err(AuthError::SessionNotFound)` - No session of that user holds the token
    /// - `Err(AppError::DbErr)` - Database error during session lookup
    pub async fn require(&self, token: &str) -> Result<AuthUser, AppError> {
        let claims = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(AuthError::from)?
        .claims;

        let session = SessionRepository::new(self.db)
            .find_by_token(token)
            .await?
            .filter(|session| session.user_id == claims.user_id)
            .ok_or(AuthError::SessionNotFound(claims.user_id))?;

        Ok(AuthUser {
            user_id: session.user_id,
        })
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
fn bearer_token(req: &Request) -> Result<&str, AuthError> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

/// Authentication middleware for every API route.
///
/// Rejects the request with 401 unless it carries a valid bearer token backed by a
/// session; otherwise inserts the verified `AuthUser` into request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&req)?;

    let user = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(token)
        .await?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
