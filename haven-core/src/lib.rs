pub mod booking;
pub mod form;
pub mod listing;
pub mod repository;
pub mod rules;
pub mod submission;

pub use booking::{BookingConfirmation, BookingField, BookingRecord, ValidationErrorSet};
pub use repository::ListingRepository;
pub use submission::{BookingIdGenerator, BookingService, IdStrategy};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrorSet),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal service error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
