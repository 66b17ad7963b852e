use std::sync::Arc;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use haven_api::{app, AppState};
use haven_core::listing::{PropertyRecord, ReviewRecord};
use haven_core::submission::BookingIdGenerator;
use haven_core::{BookingService, CoreError, CoreResult, ListingRepository};
use haven_shared::PropertyId;
use haven_store::{sample_data, InMemoryListingRepository};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

struct FixedIds;

impl BookingIdGenerator for FixedIds {
    fn next_id(&self) -> String {
        "BK-1700000000000".to_string()
    }
}

struct BrokenRepository;

#[async_trait]
impl ListingRepository for BrokenRepository {
    async fn list_properties(&self) -> CoreResult<Vec<PropertyRecord>> {
        Err(CoreError::Internal("connection refused".to_string()))
    }

    async fn get_property(&self, _id: PropertyId) -> CoreResult<Option<PropertyRecord>> {
        Err(CoreError::Internal("connection refused".to_string()))
    }

    async fn get_reviews(&self, _id: PropertyId) -> CoreResult<Vec<ReviewRecord>> {
        Err(CoreError::Internal("connection refused".to_string()))
    }
}

fn test_app() -> Router {
    app(AppState::new(
        Arc::new(InMemoryListingRepository::with_sample_data()),
        BookingService::new(Arc::new(FixedIds)),
    ))
}

fn valid_booking() -> Value {
    json!({
        "firstName": "Ann",
        "lastName": "Lee",
        "email": "ann@example.com",
        "phoneNumber": "5551234567",
        "cardNumber": "4111111111111111",
        "expirationDate": "09/27",
        "cvv": "123",
        "streetAddress": "1 Main St",
        "city": "Metropolis",
        "state": "NY",
        "zipCode": "10001",
        "country": "USA"
    })
}

async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let req = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };
    (status, value)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(test_app(), Method::GET, uri, None).await
}

async fn post_booking(body: Value) -> (StatusCode, Value) {
    send(test_app(), Method::POST, "/bookings", Some(body.to_string())).await
}

#[tokio::test]
async fn test_list_properties() {
    let (status, body) = get("/properties").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    let expected: Vec<String> = sample_data::properties().into_iter().map(|p| p.name).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_routes_are_mirrored_under_api_prefix() {
    let (status, body) = get("/api/properties/0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], sample_data::properties()[0].name);
}

#[tokio::test]
async fn test_get_property_by_index() {
    let (status, body) = get("/properties/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["address"]["city"], "Aspen");
    assert_eq!(body["offers"]["bed"], "4");
}

#[tokio::test]
async fn test_get_property_out_of_bounds_is_not_found() {
    let past_end = sample_data::properties().len();
    for uri in [
        format!("/properties/{}", past_end),
        "/properties/-1".to_string(),
        "/properties/abc".to_string(),
        "/properties/99999999999999999999".to_string(),
    ] {
        let (status, body) = get(&uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body, json!({ "message": "Property not found" }));
    }
}

#[tokio::test]
async fn test_reviews_for_property() {
    let (status, body) = get("/properties/0/reviews").await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["author"], "Sarah Johnson");
}

#[tokio::test]
async fn test_reviews_empty_is_success() {
    let (status, body) = get("/properties/2/reviews").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get("/properties/500/reviews").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get("/properties/99999999999999999999/reviews").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_reviews_bad_index_is_bad_request() {
    let (status, body) = get("/properties/abc/reviews").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid property ID" }));
}

#[tokio::test]
async fn test_listing_methods_not_allowed() {
    for uri in ["/properties", "/properties/0", "/properties/0/reviews"] {
        let (status, body) = send(test_app(), Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{}", uri);
        assert_eq!(body, json!({ "message": "Method not allowed" }));
    }
}

#[tokio::test]
async fn test_valid_booking_is_created() {
    let (status, body) = post_booking(valid_booking()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["bookingId"], "BK-1700000000000");
    assert_eq!(body["message"], "Booking confirmed successfully!");
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_booking_with_default_ids() {
    let app = app(AppState::new(
        Arc::new(InMemoryListingRepository::with_sample_data()),
        BookingService::default(),
    ));
    let (status, body) = send(app, Method::POST, "/api/bookings", Some(valid_booking().to_string())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["bookingId"].as_str().unwrap().starts_with("BK-"));
}

#[tokio::test]
async fn test_bad_email_rejected() {
    let mut booking = valid_booking();
    booking["email"] = json!("bad-email");

    let (status, body) = post_booking(booking).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": { "email": "Valid email is required" } }));
}

#[tokio::test]
async fn test_short_card_rejected() {
    let mut booking = valid_booking();
    booking["cardNumber"] = json!("123");

    let (status, body) = post_booking(booking).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": { "cardNumber": "Valid card number is required" } }));
}

#[tokio::test]
async fn test_missing_and_null_fields_are_validation_errors() {
    let (status, body) = post_booking(json!({ "firstName": "Ann", "city": null })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 11);
    assert!(!errors.contains_key("firstName"));
    assert_eq!(errors["city"], "City is required");
}

#[tokio::test]
async fn test_malformed_booking_is_internal_failure() {
    let bodies = [
        "not json".to_string(),
        "[1, 2, 3]".to_string(),
        "[]".to_string(),
        "null".to_string(),
        "\"Ann\"".to_string(),
        json!({ "firstName": 42 }).to_string(),
        json!([
            "Ann", "Lee", "ann@example.com", "5551234567", "4111111111111111", "09/27",
            "123", "1 Main St", "Metropolis", "NY", "10001", "USA"
        ])
        .to_string(),
    ];
    for raw in bodies {
        let (status, body) = send(test_app(), Method::POST, "/bookings", Some(raw.clone())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", raw);
        assert_eq!(body, json!({ "message": "Failed to process booking" }));
    }
}

#[tokio::test]
async fn test_get_bookings_is_informational() {
    let (status, body) = get("/bookings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Use POST to submit a booking" }));

    let (status, body) = send(test_app(), Method::PUT, "/bookings", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "message": "Method not allowed" }));
}

#[tokio::test]
async fn test_repository_failure_hides_detail() {
    let app = app(AppState::new(Arc::new(BrokenRepository), BookingService::default()));

    let (status, body) = send(app.clone(), Method::GET, "/properties", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to fetch properties" }));

    let (status, body) = send(app.clone(), Method::GET, "/properties/0", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to fetch property details" }));

    let (status, body) = send(app, Method::GET, "/properties/0/reviews", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to fetch reviews" }));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, body) = get("/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not found" }));
}
