use super::*;
use test_utils::factory::session::{sign_token, SessionFactory};

/// Tests that a signed token held by a session of its user is accepted.
///
/// Expected: Ok(AuthUser) with the session's user id
#[tokio::test]
async fn accepts_token_backed_by_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = test.token_for(user.id).await.unwrap();

    let auth_user = AuthGuard::new(db, TEST_JWT_SECRET).require(&token).await?;

    assert_eq!(auth_user.user_id, user.id);

    Ok(())
}

#[tokio::test]
async fn rejects_token_signed_with_other_secret() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = sign_token(user.id, "some-other-secret").unwrap();
    SessionFactory::new(db, user.id)
        .token(token.clone())
        .build()
        .await
        .unwrap();

    let result = AuthGuard::new(db, TEST_JWT_SECRET).require(&token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

#[tokio::test]
async fn rejects_garbage_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthGuard::new(db, TEST_JWT_SECRET)
        .require("not-a-jwt")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that a correctly signed token is refused once no session holds it.
///
/// Expected: Err(AuthError::SessionNotFound)
#[tokio::test]
async fn rejects_token_without_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = sign_token(user.id, TEST_JWT_SECRET).unwrap();

    let result = AuthGuard::new(db, TEST_JWT_SECRET).require(&token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::SessionNotFound(id))) if id == user.id
    ));

    Ok(())
}

/// Tests that a token stored on another user's session is refused.
///
/// The token's claims name one user while the session row belongs to another.
///
/// Expected: Err(AuthError::SessionNotFound)
#[tokio::test]
async fn rejects_session_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let claimed = factory::create_user(db).await?;
    let holder = factory::create_user(db).await?;
    let token = sign_token(claimed.id, TEST_JWT_SECRET).unwrap();
    SessionFactory::new(db, holder.id)
        .token(token.clone())
        .build()
        .await
        .unwrap();

    let result = AuthGuard::new(db, TEST_JWT_SECRET).require(&token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::SessionNotFound(_)))
    ));

    Ok(())
}
