use async_trait::async_trait;
use haven_shared::PropertyId;
use crate::listing::{PropertyRecord, ReviewRecord};
use crate::CoreResult;

/// Read-only access to listings and their reviews.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Every property, in stored order.
    async fn list_properties(&self) -> CoreResult<Vec<PropertyRecord>>;

    async fn get_property(&self, id: PropertyId) -> CoreResult<Option<PropertyRecord>>;

    /// Reviews for a property. Empty when the property has none or does not exist.
    async fn get_reviews(&self, id: PropertyId) -> CoreResult<Vec<ReviewRecord>>;
}
