use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub state: String,
    pub city: String,
    pub country: String,
}

/// Sleeping and bathroom capacity, kept as display strings ("3", "2-3").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offers {
    pub bed: String,
    pub shower: String,
    pub occupants: String,
}

/// A listable property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    pub address: Address,
    pub rating: f32,
    pub category: Vec<String>,
    /// Nightly price in whole currency units.
    pub price: u32,
    pub offers: Offers,
    pub image: String,
    /// Discount percentage, 0 when none applies.
    #[serde(default)]
    pub discount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: u32,
    pub author: String,
    pub rating: f32,
    pub comment: String,
    /// ISO 8601 calendar date, e.g. "2024-03-15".
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
