use std::collections::HashMap;
use std::path::Path;
use async_trait::async_trait;
use haven_core::CoreResult;
use haven_core::listing::{PropertyRecord, ReviewRecord};
use haven_core::repository::ListingRepository;
use haven_shared::PropertyId;
use serde::Deserialize;
use crate::{sample_data, StoreError};

/// Read-only listing store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListingRepository {
    properties: Vec<PropertyRecord>,
    reviews: HashMap<usize, Vec<ReviewRecord>>,
}

// On-disk seed layout. Review keys are property positions as strings,
// since JSON object keys cannot be numbers.
#[derive(Deserialize)]
struct SeedFile {
    properties: Vec<PropertyRecord>,
    #[serde(default)]
    reviews: HashMap<String, Vec<ReviewRecord>>,
}

impl InMemoryListingRepository {
    pub fn new(properties: Vec<PropertyRecord>, reviews: HashMap<usize, Vec<ReviewRecord>>) -> Self {
        Self { properties, reviews }
    }

    /// The bundled sample listings.
    pub fn with_sample_data() -> Self {
        Self::new(sample_data::properties(), sample_data::reviews())
    }

    pub fn from_json_str(raw: &str) -> Result<Self, StoreError> {
        let seed: SeedFile = serde_json::from_str(raw)?;

        let mut reviews = HashMap::with_capacity(seed.reviews.len());
        for (key, entries) in seed.reviews {
            let id = PropertyId::parse(&key).map_err(|_| StoreError::InvalidReviewKey(key.clone()))?;
            reviews.insert(id.index(), entries);
        }

        Ok(Self::new(seed.properties, reviews))
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io { path: path.display().to_string(), source })?;

        let repo = Self::from_json_str(&raw)?;
        tracing::info!(
            "Loaded {} properties and reviews for {} of them from {}",
            repo.properties.len(),
            repo.reviews.len(),
            path.display()
        );
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn list_properties(&self) -> CoreResult<Vec<PropertyRecord>> {
        Ok(self.properties.clone())
    }

    async fn get_property(&self, id: PropertyId) -> CoreResult<Option<PropertyRecord>> {
        Ok(self.properties.get(id.index()).cloned())
    }

    async fn get_reviews(&self, id: PropertyId) -> CoreResult<Vec<ReviewRecord>> {
        Ok(self.reviews.get(&id.index()).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_preserves_order() {
        let repo = InMemoryListingRepository::with_sample_data();
        let listed = repo.list_properties().await.unwrap();
        assert_eq!(listed, sample_data::properties());
    }

    #[tokio::test]
    async fn test_out_of_bounds_is_none() {
        let repo = InMemoryListingRepository::with_sample_data();
        let last = PropertyId::new(repo.len() - 1);
        assert!(repo.get_property(last).await.unwrap().is_some());
        assert!(repo.get_property(PropertyId::new(repo.len())).await.unwrap().is_none());
        assert!(repo.get_property(PropertyId::new(usize::MAX)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_property_without_reviews_is_empty() {
        let repo = InMemoryListingRepository::with_sample_data();
        assert!(!repo.get_reviews(PropertyId::new(0)).await.unwrap().is_empty());
        assert!(repo.get_reviews(PropertyId::new(2)).await.unwrap().is_empty());
        assert!(repo.get_reviews(PropertyId::new(999)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_from_json() {
        let raw = r#"
            {
                "properties": [{
                    "name": "Loft",
                    "address": { "state": "Berlin", "city": "Berlin", "country": "Germany" },
                    "rating": 4.2,
                    "category": ["City View"],
                    "price": 150,
                    "offers": { "bed": "1", "shower": "1", "occupants": "2" },
                    "image": "https://example.com/loft.jpg",
                    "discount": 5
                }],
                "reviews": {
                    "0": [{ "id": 7, "author": "Kai", "rating": 4.0, "comment": "Nice", "date": "2024-06-01" }]
                }
            }
        "#;
        let repo = InMemoryListingRepository::from_json_str(raw).unwrap();
        assert_eq!(repo.len(), 1);
        let reviews = repo.get_reviews(PropertyId::new(0)).await.unwrap();
        assert_eq!(reviews[0].author, "Kai");
        assert_eq!(reviews[0].avatar, None);
    }

    #[test]
    fn test_seed_rejects_bad_review_key() {
        let raw = r#"{ "properties": [], "reviews": { "first": [] } }"#;
        let err = InMemoryListingRepository::from_json_str(raw).unwrap_err();
        assert!(matches!(err, StoreError::InvalidReviewKey(key) if key == "first"));
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_io_error() {
        let err = InMemoryListingRepository::from_json_file("/nonexistent/haven-seed.json")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
