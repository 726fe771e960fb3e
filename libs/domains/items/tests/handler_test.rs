//! Handler tests for the Items domain

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use domain_bookings::{
    BookedItem, BookingError, BookingRepository, BookingResult, BookingStatus,
    InMemoryBookingRepository, NewBooking, UserDirectory, UserRecord,
};
use domain_items::{
    InMemoryCommentRepository, InMemoryItemRepository, Item, ItemDetails, ItemService, handlers,
};
use http_body_util::BodyExt;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

const ACTOR_HEADER: &str = "X-Sharer-User-Id";

struct KnownUsers(Vec<i64>);

#[async_trait]
impl UserDirectory for KnownUsers {
    async fn resolve_user(&self, user_id: i64) -> BookingResult<UserRecord> {
        if self.0.contains(&user_id) {
            Ok(UserRecord {
                id: user_id,
                name: format!("user-{}", user_id),
                email: format!("user{}@example.com", user_id),
            })
        } else {
            Err(BookingError::NotFound(format!(
                "User with ID: {} not found",
                user_id
            )))
        }
    }
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app_with_bookings(user_ids: &[i64]) -> (Router, Arc<InMemoryBookingRepository>) {
    let bookings = Arc::new(InMemoryBookingRepository::new());
    let service = ItemService::new(
        Arc::new(InMemoryItemRepository::new()),
        Arc::new(InMemoryCommentRepository::new()),
        bookings.clone(),
        Arc::new(KnownUsers(user_ids.to_vec())),
    );
    (handlers::router(service), bookings)
}

fn app(user_ids: &[i64]) -> Router {
    app_with_bookings(user_ids).0
}

fn create_request(actor: i64, name: &str, available: bool) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .header(ACTOR_HEADER, actor.to_string())
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": name,
                "description": format!("{} description", name),
                "available": available,
            }))
            .unwrap(),
        ))
        .unwrap()
}

fn get_request(actor: i64, uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(ACTOR_HEADER, actor.to_string())
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn create_item_returns_201_with_owner() {
    let app = app(&[10]);

    let response = app.oneshot(create_request(10, "drill", true)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.owner_id, 10);
    assert!(item.available);
}

#[tokio::test]
async fn create_item_without_actor_header_is_400() {
    let app = app(&[10]);
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "drill",
                "description": "x",
                "available": true,
            }))
            .unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_item_with_blank_name_is_400() {
    let app = app(&[10]);
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .header(ACTOR_HEADER, "10")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "",
                "description": "x",
                "available": true,
            }))
            .unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_by_non_owner_is_403() {
    let app = app(&[10, 20]);

    app.clone()
        .oneshot(create_request(10, "drill", true))
        .await
        .unwrap();

    let request = Request::builder()
        .method("PATCH")
        .uri("/1")
        .header("content-type", "application/json")
        .header(ACTOR_HEADER, "20")
        .body(Body::from(
            serde_json::to_string(&json!({ "available": false })).unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn owner_sees_booking_annotations_in_the_detail() {
    let (app, bookings) = app_with_bookings(&[10, 20]);

    let response = app
        .clone()
        .oneshot(create_request(10, "drill", true))
        .await
        .unwrap();
    let item: Item = json_body(response.into_body()).await;

    let now = Utc::now();
    let booking = bookings
        .create(NewBooking {
            start: now - Duration::hours(4),
            end: now - Duration::hours(2),
            item: BookedItem {
                id: item.id,
                name: item.name.clone(),
                owner_id: item.owner_id,
            },
            booker_id: 20,
        })
        .await
        .unwrap();
    bookings
        .set_status(booking.id, BookingStatus::Approved)
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get_request(10, &format!("/{}", item.id)))
        .await
        .unwrap();
    let owner_view: ItemDetails = json_body(response.into_body()).await;
    assert!(owner_view.last_booking.is_some());

    let response = app
        .oneshot(get_request(20, &format!("/{}", item.id)))
        .await
        .unwrap();
    let renter_view: ItemDetails = json_body(response.into_body()).await;
    assert!(renter_view.last_booking.is_none());
}

#[tokio::test]
async fn search_matches_name_and_description() {
    let app = app(&[10]);

    app.clone()
        .oneshot(create_request(10, "Power Drill", true))
        .await
        .unwrap();
    app.clone()
        .oneshot(create_request(10, "broken drill", false))
        .await
        .unwrap();

    let response = app
        .oneshot(get_request(10, "/search?text=drill"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Power Drill");
}

#[tokio::test]
async fn search_blank_text_is_an_empty_listing() {
    let app = app(&[10]);
    let response = app.oneshot(get_request(10, "/search?text=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn search_without_matches_is_404() {
    let app = app(&[10]);
    app.clone()
        .oneshot(create_request(10, "drill", true))
        .await
        .unwrap();

    let response = app
        .oneshot(get_request(10, "/search?text=kayak"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn comment_without_a_finished_rental_is_400() {
    let app = app(&[10, 20]);
    app.clone()
        .oneshot(create_request(10, "drill", true))
        .await
        .unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/1/comment")
        .header("content-type", "application/json")
        .header(ACTOR_HEADER, "20")
        .body(Body::from(
            serde_json::to_string(&json!({ "text": "never rented" })).unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_item_returns_204() {
    let app = app(&[10]);
    app.clone()
        .oneshot(create_request(10, "drill", true))
        .await
        .unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri("/1")
        .header(ACTOR_HEADER, "10")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get_request(10, "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
