use super::*;

/// Tests that moving a booking frees a slot in the old room and takes one in the new.
///
/// Expected: old +1, new -1, total capacity unchanged, booking points at new room
#[tokio::test]
async fn moves_booking_and_conserves_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (hotel, old_room) = factory::helpers::create_hotel_with_room(db, 1).await?;
    let new_room = factory::create_room(db, hotel.id, 2).await?;
    let booking = factory::create_booking(db, user.id, old_room.id).await?;

    let service = BookingService::new(db);
    let observed = service.check_room_availability(new_room.id).await?;
    let moved_id = service
        .update_booking(MoveBookingParams {
            booking_id: booking.id,
            old_room_id: old_room.id,
            new_room: observed,
        })
        .await?;

    assert_eq!(moved_id, booking.id);
    assert_eq!(capacity_of(db, old_room.id).await?, 2);
    assert_eq!(capacity_of(db, new_room.id).await?, 1);
    let moved = service.get_booking_by_id(booking.id).await?.unwrap();
    assert_eq!(moved.room_id, new_room.id);

    Ok(())
}

/// Tests that a move based on an outdated view of the target room rolls back fully.
///
/// The old room's increment happens first inside the transaction; it must be undone
/// when the target room turns out to have changed.
///
/// Expected: Err(AppError::Conflict), both capacities and the booking unchanged
#[tokio::test]
async fn rolls_back_when_target_room_changed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (hotel, old_room) = factory::helpers::create_hotel_with_room(db, 1).await?;
    let new_room = factory::create_room(db, hotel.id, 2).await?;
    let booking = factory::create_booking(db, user.id, old_room.id).await?;

    let service = BookingService::new(db);
    let stale = service.check_room_availability(new_room.id).await?;

    // Concurrent writer
    let fresh = service.check_room_availability(new_room.id).await?;
    service.create_booking(other.id, fresh).await?;

    let result = service
        .update_booking(MoveBookingParams {
            booking_id: booking.id,
            old_room_id: old_room.id,
            new_room: stale,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(capacity_of(db, old_room.id).await?, 1);
    assert_eq!(capacity_of(db, new_room.id).await?, 1);
    let unchanged = service.get_booking_by_id(booking.id).await?.unwrap();
    assert_eq!(unchanged.room_id, old_room.id);

    Ok(())
}

#[tokio::test]
async fn fails_when_old_room_is_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;
    let booking = factory::create_booking(db, user.id, room.id).await?;

    let service = BookingService::new(db);
    let observed = service.check_room_availability(room.id).await?;
    let result = service
        .update_booking(MoveBookingParams {
            booking_id: booking.id,
            old_room_id: 9999,
            new_room: observed,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::RoomNotFound))
    ));
    assert_eq!(capacity_of(db, room.id).await?, 2);

    Ok(())
}
