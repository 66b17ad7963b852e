pub mod ids;
pub mod pii;

pub use ids::{IdParseError, PropertyId};
pub use pii::Masked;
