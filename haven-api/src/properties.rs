use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use haven_core::listing::{PropertyRecord, ReviewRecord};
use haven_shared::{IdParseError, PropertyId};
use crate::error::{method_not_allowed, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(list_properties).fallback(method_not_allowed))
        .route("/properties/{id}", get(get_property).fallback(method_not_allowed))
        .route("/properties/{id}/reviews", get(get_reviews).fallback(method_not_allowed))
}

/// GET /properties
async fn list_properties(State(state): State<AppState>) -> Result<Json<Vec<PropertyRecord>>, AppError> {
    let properties = state
        .listings
        .list_properties()
        .await
        .map_err(|e| AppError::internal("Failed to fetch properties", e))?;

    Ok(Json(properties))
}

/// GET /properties/{id}
/// An id that is not a valid index is treated the same as one past the end.
async fn get_property(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PropertyRecord>, AppError> {
    let not_found = || AppError::NotFoundError("Property not found".to_string());

    let id = PropertyId::parse(&raw_id).map_err(|_| not_found())?;
    let property = state
        .listings
        .get_property(id)
        .await
        .map_err(|e| AppError::internal("Failed to fetch property details", e))?
        .ok_or_else(not_found)?;

    Ok(Json(property))
}

/// GET /properties/{id}/reviews
/// Unlike the single-property lookup, a malformed id is a 400 here.
async fn get_reviews(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<ReviewRecord>>, AppError> {
    let id = match PropertyId::parse(&raw_id) {
        Ok(id) => id,
        // A well-formed integer that can never name a property.
        Err(IdParseError::Negative(_)) | Err(IdParseError::OutOfRange(_)) => {
            return Ok(Json(Vec::new()))
        }
        Err(IdParseError::Malformed(_)) => {
            return Err(AppError::BadRequestError("Invalid property ID".to_string()))
        }
    };

    let reviews = state
        .listings
        .get_reviews(id)
        .await
        .map_err(|e| AppError::internal("Failed to fetch reviews", e))?;

    tracing::debug!("Found {} reviews for property {}", reviews.len(), id);
    Ok(Json(reviews))
}
