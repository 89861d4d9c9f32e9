use super::*;
use crate::server::data::session::SessionRepository;
use test_utils::error::TestError;

#[tokio::test]
async fn finds_session_by_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ticket_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let session = factory::create_session(db, user.id).await?;

    let found = SessionRepository::new(db)
        .find_by_token(&session.token)
        .await?
        .unwrap();

    assert_eq!(found.id, session.id);
    assert_eq!(found.user_id, user.id);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ticket_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_session(db, user.id).await?;

    let found = SessionRepository::new(db).find_by_token("not-a-token").await?;

    assert!(found.is_none());

    Ok(())
}
