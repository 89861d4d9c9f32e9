use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::hotel::RoomDto;

/// The caller's booking together with the room it occupies.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    #[serde(rename = "Room")]
    pub room: RoomDto,
}

/// Body of `POST /booking` and `PUT /booking/{booking_id}`.
///
/// `room_id` is optional so that a missing field can be answered with 404 like
/// any other unusable room id instead of a deserialization error.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequestDto {
    #[serde(default)]
    pub room_id: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdDto {
    pub booking_id: i32,
}
