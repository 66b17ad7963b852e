use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use haven_core::{BookingConfirmation, BookingRecord};
use serde_json::{json, Value};
use crate::error::{method_not_allowed, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/bookings",
        post(submit_booking).get(booking_info).fallback(method_not_allowed),
    )
}

/// POST /bookings
async fn submit_booking(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    // A body that is not a booking record at all is a processing failure,
    // not a field-level rejection.
    let Json(body) = payload.map_err(|e| AppError::internal("Failed to process booking", e))?;
    let record = parse_record(body)?;

    let confirmation = state.bookings.submit(&record)?;

    Ok((StatusCode::CREATED, Json(confirmation)))
}

/// Only a JSON object is a record. Serde would otherwise fill the fields
/// positionally from an array.
fn parse_record(body: Value) -> Result<BookingRecord, AppError> {
    if !body.is_object() {
        return Err(AppError::internal(
            "Failed to process booking",
            format!("booking body is not an object: {}", json_kind(&body)),
        ));
    }
    serde_json::from_value(body).map_err(|e| AppError::internal("Failed to process booking", e))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// GET /bookings
async fn booking_info() -> Json<Value> {
    Json(json!({ "message": "Use POST to submit a booking" }))
}
