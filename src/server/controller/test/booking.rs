use super::*;
use test_utils::factory::{helpers::create_user_with_ticket, ticket_type::TicketTypeFactory};

async fn capacity_of(db: &DatabaseConnection, room_id: i32) -> i32 {
    entity::prelude::Room::find_by_id(room_id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .capacity
}

#[tokio::test]
async fn get_booking_without_booking_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let token = test.token_for(user.id).await.unwrap();

    let (status, _) = send(db, Method::GET, "/booking", Some(&token), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn get_booking_returns_booking_with_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 3).await?;
    let booking = factory::create_booking(db, user.id, room.id).await?;
    let token = test.token_for(user.id).await.unwrap();

    let (status, body) = send(db, Method::GET, "/booking", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], booking.id);
    assert_eq!(body["Room"]["id"], room.id);
    assert_eq!(body["Room"]["capacity"], 3);
    assert!(body["Room"].get("version").is_none());

    Ok(())
}

/// Tests the happy path of booking a room.
///
/// Expected: 200 with `bookingId`, room capacity decremented by one
#[tokio::test]
async fn post_booking_takes_a_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;
    let token = test.token_for(user.id).await.unwrap();

    let (status, body) = send(
        db,
        Method::POST,
        "/booking",
        Some(&token),
        Some(json!({ "roomId": room.id })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let booking_id = body["bookingId"].as_i64().unwrap() as i32;
    let stored = entity::prelude::Booking::find_by_id(booking_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.user_id, user.id);
    assert_eq!(stored.room_id, room.id);
    assert_eq!(capacity_of(db, room.id).await, 1);

    Ok(())
}

/// Tests that unusable room ids are answered with 404 and change nothing.
///
/// Covers zero, negative, missing and malformed bodies.
///
/// Expected: 404 and no booking rows
#[tokio::test]
async fn post_booking_with_invalid_room_id_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;
    let token = test.token_for(user.id).await.unwrap();

    let bodies = [
        json!({ "roomId": 0 }),
        json!({ "roomId": -4 }),
        json!({}),
        json!({ "roomId": "one" }),
        json!({ "roomId": 9999 }),
    ];

    for body in bodies {
        let (status, _) = send(db, Method::POST, "/booking", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);
    assert_eq!(capacity_of(db, room.id).await, 2);

    Ok(())
}

#[tokio::test]
async fn post_booking_to_full_room_is_forbidden() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 0).await?;
    let token = test.token_for(user.id).await.unwrap();

    let (status, _) = send(
        db,
        Method::POST,
        "/booking",
        Some(&token),
        Some(json!({ "roomId": room.id })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(capacity_of(db, room.id).await, 0);

    Ok(())
}

#[tokio::test]
async fn post_booking_with_remote_ticket_is_forbidden() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) =
        create_user_with_ticket(db, TicketTypeFactory::new(db).remote(true), "PAID").await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;
    let token = test.token_for(user.id).await.unwrap();

    let (status, _) = send(
        db,
        Method::POST,
        "/booking",
        Some(&token),
        Some(json!({ "roomId": room.id })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(capacity_of(db, room.id).await, 2);

    Ok(())
}

/// Tests moving a booking between rooms through the API.
///
/// Expected: 200 with the same booking id; old room gains a slot, new room loses one
#[tokio::test]
async fn put_booking_moves_to_new_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (hotel, old_room) = factory::helpers::create_hotel_with_room(db, 1).await?;
    let new_room = factory::create_room(db, hotel.id, 2).await?;
    let booking = factory::create_booking(db, user.id, old_room.id).await?;
    let token = test.token_for(user.id).await.unwrap();

    let (status, body) = send(
        db,
        Method::PUT,
        &format!("/booking/{}", booking.id),
        Some(&token),
        Some(json!({ "roomId": new_room.id })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookingId"], booking.id);
    assert_eq!(capacity_of(db, old_room.id).await, 2);
    assert_eq!(capacity_of(db, new_room.id).await, 1);

    Ok(())
}

#[tokio::test]
async fn put_booking_to_same_room_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;
    let booking = factory::create_booking(db, user.id, room.id).await?;
    let token = test.token_for(user.id).await.unwrap();

    let (status, _) = send(
        db,
        Method::PUT,
        &format!("/booking/{}", booking.id),
        Some(&token),
        Some(json!({ "roomId": room.id })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(capacity_of(db, room.id).await, 2);

    Ok(())
}

#[tokio::test]
async fn put_booking_without_existing_booking_is_forbidden() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;
    let token = test.token_for(user.id).await.unwrap();

    let (status, _) = send(
        db,
        Method::PUT,
        "/booking/1",
        Some(&token),
        Some(json!({ "roomId": room.id })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
async fn put_booking_with_invalid_booking_id_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (_, room) = factory::helpers::create_hotel_with_room(db, 2).await?;
    let token = test.token_for(user.id).await.unwrap();

    for uri in ["/booking/0", "/booking/abc"] {
        let (status, _) = send(
            db,
            Method::PUT,
            uri,
            Some(&token),
            Some(json!({ "roomId": room.id })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
    }

    Ok(())
}

#[tokio::test]
async fn put_unknown_booking_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (hotel, old_room) = factory::helpers::create_hotel_with_room(db, 1).await?;
    let new_room = factory::create_room(db, hotel.id, 2).await?;
    factory::create_booking(db, user.id, old_room.id).await?;
    let token = test.token_for(user.id).await.unwrap();

    let (status, _) = send(
        db,
        Method::PUT,
        "/booking/9999",
        Some(&token),
        Some(json!({ "roomId": new_room.id })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(capacity_of(db, old_room.id).await, 1);
    assert_eq!(capacity_of(db, new_room.id).await, 2);

    Ok(())
}

/// Tests that moving into a full room is refused before anything changes.
///
/// Expected: 403, both capacities unchanged, booking still in the old room
#[tokio::test]
async fn put_booking_to_full_room_is_forbidden() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (hotel, old_room) = factory::helpers::create_hotel_with_room(db, 1).await?;
    let full_room = factory::create_room(db, hotel.id, 0).await?;
    let booking = factory::create_booking(db, user.id, old_room.id).await?;
    let token = test.token_for(user.id).await.unwrap();

    let (status, _) = send(
        db,
        Method::PUT,
        &format!("/booking/{}", booking.id),
        Some(&token),
        Some(json!({ "roomId": full_room.id })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(capacity_of(db, old_room.id).await, 1);
    assert_eq!(capacity_of(db, full_room.id).await, 0);
    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.room_id, old_room.id);

    Ok(())
}

/// Tests that an unknown target room and a body without `roomId` are both 404.
///
/// Expected: 404 for each body, old room capacity unchanged
#[tokio::test]
async fn put_booking_with_unusable_room_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let (_, old_room) = factory::helpers::create_hotel_with_room(db, 1).await?;
    let booking = factory::create_booking(db, user.id, old_room.id).await?;
    let token = test.token_for(user.id).await.unwrap();

    for body in [json!({ "roomId": 9999 }), json!({})] {
        let (status, _) = send(
            db,
            Method::PUT,
            &format!("/booking/{}", booking.id),
            Some(&token),
            Some(body.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", body);
    }

    assert_eq!(capacity_of(db, old_room.id).await, 1);

    Ok(())
}
