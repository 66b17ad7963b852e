pub mod app_config;
pub mod listing_repo;
pub mod sample_data;

pub use listing_repo::InMemoryListingRepository;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Review key is not a property index: {0:?}")]
    InvalidReviewKey(String),
}
