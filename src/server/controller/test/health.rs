use super::*;

#[tokio::test]
async fn health_is_public() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = send(db, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn api_routes_require_token() {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for uri in ["/booking", "/tickets", "/tickets/types", "/hotels", "/payments?ticketId=1"] {
        let (status, body) = send(db, Method::GET, uri, None, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["error"], "Unauthorized");
    }
}
