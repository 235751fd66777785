mod fixtures;

use chrono::NaiveDate;
use fixtures::test_room;
use hotelier_calendar::service::{HttpAvailabilityService, HttpServiceFactory, ServiceError};
use hotelier_common::client_for;
use hotelier_common::models::{AvailabilityQuery, RoomLookup};
use hotelier_config::ApiConfig;
use hotelier_common::services::{
    AvailabilityService, InMemorySession, RoomService, SessionContext, SESSION_TOKEN_KEY,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query(guests: Option<u32>) -> AvailabilityQuery {
    AvailabilityQuery {
        room_category: "suites".to_string(),
        room_title: "Ocean View".to_string(),
        check_in: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2025, 8, 30).unwrap(),
        guests,
    }
}

fn test_client(server: &MockServer) -> reqwest::Client {
    client_for(&ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .unwrap()
}

fn availability_service(server: &MockServer, token: Option<&str>) -> HttpAvailabilityService {
    let session = Arc::new(InMemorySession::new());
    if let Some(token) = token {
        session.set(SESSION_TOKEN_KEY, token.to_string());
    }
    HttpAvailabilityService::new(test_client(&server), server.uri(), session)
}

#[tokio::test]
async fn test_booked_dates_sends_query_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bookings/check-availability"))
        .and(query_param("roomCategory", "suites"))
        .and(query_param("roomTitle", "Ocean View"))
        .and(query_param("checkIn", "2025-06-01"))
        .and(query_param("checkOut", "2025-08-30"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bookedDates": ["2025-06-06", "2025-06-07T00:00:00.000Z"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = availability_service(&server, Some("secret-token"));
    let response = service.booked_dates(&query(None)).await.unwrap();

    assert_eq!(
        response.booked_dates,
        Some(vec![
            "2025-06-06".to_string(),
            "2025-06-07T00:00:00.000Z".to_string()
        ])
    );
    assert_eq!(response.is_available, None);
}

#[tokio::test]
async fn test_check_availability_sends_guests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bookings/check-availability"))
        .and(query_param("guests", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isAvailable": false,
            "message": "Fully booked"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = availability_service(&server, None);
    let response = service.check_availability(&query(Some(2))).await.unwrap();

    assert_eq!(response.is_available, Some(false));
    assert_eq!(response.message.as_deref(), Some("Fully booked"));
}

#[tokio::test]
async fn test_availability_error_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bookings/check-availability"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let service = availability_service(&server, None);
    let err = service.booked_dates(&query(None)).await.unwrap_err();

    match err {
        ServiceError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("Unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_availability_garbage_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bookings/check-availability"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let service = availability_service(&server, None);
    assert!(matches!(
        service.booked_dates(&query(None)).await,
        Err(ServiceError::Http(_))
    ));
}

#[tokio::test]
async fn test_find_room_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rooms/suites/ocean-view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "r-101",
            "title": "Ocean View",
            "category": "suites",
            "slug": "ocean-view",
            "price": 5000,
            "maxOccupancy": 3,
            "imageUrl": "https://cdn.example.com/ocean.jpg"
        })))
        .mount(&server)
        .await;

    let rooms = HttpServiceFactory::new(test_client(&server), server.uri()).room_service();
    assert_eq!(
        rooms.find_room("suites", "ocean-view").await,
        RoomLookup::Found(test_room())
    );
}

#[tokio::test]
async fn test_find_room_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rooms/suites/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let rooms = HttpServiceFactory::new(test_client(&server), server.uri()).room_service();
    assert_eq!(rooms.find_room("suites", "missing").await, RoomLookup::NotFound);
}

#[tokio::test]
async fn test_find_room_server_error_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rooms/suites/ocean-view"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let rooms = HttpServiceFactory::new(test_client(&server), server.uri()).room_service();
    assert!(matches!(
        rooms.find_room("suites", "ocean-view").await,
        RoomLookup::Failed(_)
    ));
}
