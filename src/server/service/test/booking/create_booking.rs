use super::*;

/// Tests that booking a room takes exactly one slot and inserts one booking.
///
/// Expected: capacity C -> C-1, one booking row for the user
#[tokio::test]
async fn takes_one_slot_and_inserts_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 3).await?;

    let service = BookingService::new(db);
    let observed = service.check_room_availability(room.id).await?;
    let booking = service.create_booking(user.id, observed).await?;

    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.room_id, room.id);
    assert_eq!(capacity_of(db, room.id).await?, 2);
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 1);

    Ok(())
}

/// Tests that booking twice is not idempotent.
///
/// Expected: two bookings, capacity reduced by two
#[tokio::test]
async fn repeated_booking_takes_another_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 3).await?;

    let service = BookingService::new(db);
    let observed = service.check_room_availability(room.id).await?;
    service.create_booking(user.id, observed).await?;
    let observed = service.check_room_availability(room.id).await?;
    service.create_booking(user.id, observed).await?;

    assert_eq!(capacity_of(db, room.id).await?, 1);
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 2);

    Ok(())
}

/// Tests that a booking based on an outdated view of the room is refused.
///
/// Another writer takes a slot after the availability check. The booking must fail
/// with a conflict and leave no trace.
///
/// Expected: Err(AppError::Conflict), no booking row, only the other writer's change
#[tokio::test]
async fn conflicts_when_room_changed_after_check() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;

    let service = BookingService::new(db);
    let stale = service.check_room_availability(room.id).await?;

    // Concurrent writer
    let other = factory::create_user(db).await?;
    let fresh = service.check_room_availability(room.id).await?;
    service.create_booking(other.id, fresh).await?;

    let result = service.create_booking(user.id, stale).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(capacity_of(db, room.id).await?, 1);
    assert!(service.get_booking(user.id).await?.is_none());
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 1);

    Ok(())
}
