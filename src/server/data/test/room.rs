use super::*;
use crate::server::data::room::RoomRepository;

/// Tests that a room is returned with its capacity and version.
///
/// Expected: Ok(Some(Room)) matching the stored row
#[tokio::test]
async fn finds_room_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;
    let room = factory::room::RoomFactory::new(db, hotel.id)
        .capacity(2)
        .version(5)
        .build()
        .await?;

    let found = RoomRepository::new(db).find_by_id(room.id).await?.unwrap();

    assert_eq!(found.id, room.id);
    assert_eq!(found.hotel_id, hotel.id);
    assert_eq!(found.capacity, 2);
    assert_eq!(found.version, 5);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = RoomRepository::new(db).find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a capacity change is applied and bumps the version.
///
/// Expected: Ok(true), capacity 2 -> 1, version 0 -> 1
#[tokio::test]
async fn decrements_capacity_and_bumps_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;
    let repo = RoomRepository::new(db);
    let observed = repo.find_by_id(room.id).await?.unwrap();

    let applied = repo.adjust_capacity(&observed, -1).await?;

    assert!(applied);
    let stored = entity::prelude::Room::find_by_id(room.id).one(db).await?.unwrap();
    assert_eq!(stored.capacity, 1);
    assert_eq!(stored.version, 1);

    Ok(())
}

/// Tests that a write based on an outdated version is refused.
///
/// The first change moves the version forward, so a second change computed from the
/// same observation must not be applied.
///
/// Expected: Ok(false), capacity reflects only the first change
#[tokio::test]
async fn refuses_change_from_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;
    let repo = RoomRepository::new(db);
    let observed = repo.find_by_id(room.id).await?.unwrap();

    assert!(repo.adjust_capacity(&observed, -1).await?);
    let applied = repo.adjust_capacity(&observed, -1).await?;

    assert!(!applied);
    let stored = entity::prelude::Room::find_by_id(room.id).one(db).await?.unwrap();
    assert_eq!(stored.capacity, 1);
    assert_eq!(stored.version, 1);

    Ok(())
}

/// Tests that capacity is never written below zero.
///
/// Expected: Ok(false), room unchanged
#[tokio::test]
async fn refuses_negative_capacity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_hotel_with_room(db, 0).await?;
    let repo = RoomRepository::new(db);
    let observed = repo.find_by_id(room.id).await?.unwrap();

    let applied = repo.adjust_capacity(&observed, -1).await?;

    assert!(!applied);
    let stored = entity::prelude::Room::find_by_id(room.id).one(db).await?.unwrap();
    assert_eq!(stored.capacity, 0);
    assert_eq!(stored.version, 0);

    Ok(())
}
