use super::*;

/// Tests that an available room is returned as observed.
///
/// Expected: Ok(Room) with the stored capacity and version
#[tokio::test]
async fn returns_room_with_free_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;

    let observed = BookingService::new(db)
        .check_room_availability(room.id)
        .await?;

    assert_eq!(observed.id, room.id);
    assert_eq!(observed.capacity, 2);
    assert_eq!(observed.version, room.version);

    Ok(())
}

/// Tests that a room with no capacity left is reported full.
///
/// Expected: Err(BookingError::FullRoom)
#[tokio::test]
async fn fails_for_full_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_hotel_with_room(db, 0).await?;

    let result = BookingService::new(db)
        .check_room_availability(room.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::FullRoom))
    ));

    Ok(())
}

/// Tests that an unknown room id is reported as not found.
///
/// Expected: Err(BookingError::RoomNotFound)
#[tokio::test]
async fn fails_for_missing_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db).check_room_availability(9999).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::RoomNotFound))
    ));

    Ok(())
}
