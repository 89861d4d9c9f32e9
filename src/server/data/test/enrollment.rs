use super::*;
use crate::server::data::enrollment::EnrollmentRepository;

#[tokio::test]
async fn finds_enrollment_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let enrollment = factory::create_enrollment(db, user.id).await?;

    let found = EnrollmentRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();

    assert_eq!(found.id, enrollment.id);
    assert_eq!(found.cpf, enrollment.cpf);

    Ok(())
}

#[tokio::test]
async fn returns_none_without_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let found = EnrollmentRepository::new(db).find_by_user_id(user.id).await?;

    assert!(found.is_none());

    Ok(())
}
