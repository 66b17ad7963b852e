use std::sync::Arc;
use serde::Deserialize;
use uuid::Uuid;
use crate::booking::{BookingConfirmation, BookingRecord};
use crate::{rules, CoreError, CoreResult};

pub const BOOKING_ID_PREFIX: &str = "BK-";

/// Source of booking identifiers.
pub trait BookingIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `BK-<unix millis>`. Two submissions accepted within the same millisecond
/// receive the same identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdGenerator;

impl BookingIdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        format!("{}{}", BOOKING_ID_PREFIX, chrono::Utc::now().timestamp_millis())
    }
}

/// `BK-<uuid v4>` without hyphens.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl BookingIdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        format!("{}{}", BOOKING_ID_PREFIX, Uuid::new_v4().simple())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Timestamp,
    Uuid,
}

impl IdStrategy {
    pub fn generator(self) -> Arc<dyn BookingIdGenerator> {
        match self {
            IdStrategy::Timestamp => Arc::new(TimestampIdGenerator),
            IdStrategy::Uuid => Arc::new(UuidIdGenerator),
        }
    }
}

/// Validates a booking and, when it passes, issues a confirmation.
#[derive(Clone)]
pub struct BookingService {
    ids: Arc<dyn BookingIdGenerator>,
}

impl BookingService {
    pub fn new(ids: Arc<dyn BookingIdGenerator>) -> Self {
        Self { ids }
    }

    pub fn from_strategy(strategy: IdStrategy) -> Self {
        Self::new(strategy.generator())
    }

    pub fn submit(&self, record: &BookingRecord) -> CoreResult<BookingConfirmation> {
        let errors = rules::validate(record);
        if !errors.is_empty() {
            tracing::info!("Booking rejected: {}", errors);
            return Err(CoreError::Validation(errors));
        }

        let booking_id = self.ids.next_id();
        tracing::info!(booking_id = %booking_id, "Booking confirmed");

        Ok(BookingConfirmation::new(booking_id))
    }
}

impl Default for BookingService {
    fn default() -> Self {
        Self::from_strategy(IdStrategy::default())
    }
}
