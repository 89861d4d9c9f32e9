use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AuthUser,
    service::hotel::HotelService,
    state::AppState,
};

/// Gate in front of the hotel routes.
///
/// Must run after `authenticate`. Lets the request through only when the user's
/// ticket is paid, in person and includes a hotel stay.
pub async fn require_hotel_access(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<AuthUser>()
        .copied()
        .ok_or(AuthError::NotAuthenticated)?;

    HotelService::new(&state.db)
        .check_access(user.user_id)
        .await?;

    Ok(next.run(req).await)
}
