use super::*;

fn is_rule_violation(result: &Result<(), AppError>) -> bool {
    matches!(
        result,
        Err(AppError::BookingErr(BookingError::BusinessRuleViolation))
    )
}

#[tokio::test]
async fn passes_for_paid_in_person_hotel_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;

    BookingService::new(db).check_business_rule(user.id).await?;

    Ok(())
}

#[tokio::test]
async fn fails_without_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = BookingService::new(db).check_business_rule(user.id).await;

    assert!(is_rule_violation(&result));

    Ok(())
}

#[tokio::test]
async fn fails_without_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_enrollment(db, user.id).await?;

    let result = BookingService::new(db).check_business_rule(user.id).await;

    assert!(is_rule_violation(&result));

    Ok(())
}

#[tokio::test]
async fn fails_for_unpaid_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = create_user_with_ticket(db, TicketTypeFactory::new(db), "RESERVED").await?;

    let result = BookingService::new(db).check_business_rule(user.id).await;

    assert!(is_rule_violation(&result));

    Ok(())
}

#[tokio::test]
async fn fails_for_remote_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) =
        create_user_with_ticket(db, TicketTypeFactory::new(db).remote(true), "PAID").await?;

    let result = BookingService::new(db).check_business_rule(user.id).await;

    assert!(is_rule_violation(&result));

    Ok(())
}

#[tokio::test]
async fn fails_for_ticket_without_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = create_user_with_ticket(
        db,
        TicketTypeFactory::new(db).includes_hotel(false),
        "PAID",
    )
    .await?;

    let result = BookingService::new(db).check_business_rule(user.id).await;

    assert!(is_rule_violation(&result));

    Ok(())
}

/// Tests that moving a booking only requires an existing booking.
///
/// The user has no ticket at all, yet passes because they hold a booking.
///
/// Expected: Ok(()) with a booking, BusinessRuleViolation without one
#[tokio::test]
async fn update_rule_only_requires_existing_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let with_booking = factory::create_user(db).await?;
    let without_booking = factory::create_user(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;
    factory::create_booking(db, with_booking.id, room.id).await?;

    let service = BookingService::new(db);

    service.check_update_business_rule(with_booking.id).await?;
    let result = service.check_update_business_rule(without_booking.id).await;
    assert!(is_rule_violation(&result));

    Ok(())
}
