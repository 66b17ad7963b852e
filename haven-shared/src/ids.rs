use std::fmt;
use serde::{Deserialize, Serialize};

/// Identifies a property by its position in the listing collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("property id is not an integer: {0:?}")]
    Malformed(String),
    #[error("property id is negative: {0}")]
    Negative(i64),
    /// A well-formed integer too large to index any collection.
    #[error("property id is out of range: {0}")]
    OutOfRange(String),
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl PropertyId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Parses a path segment. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, IdParseError> {
        let trimmed = raw.trim();
        if !is_integer_literal(trimmed) {
            return Err(IdParseError::Malformed(trimmed.to_string()));
        }

        let value: i64 = trimmed
            .parse()
            .map_err(|_| IdParseError::OutOfRange(trimmed.to_string()))?;

        if value < 0 {
            return Err(IdParseError::Negative(value));
        }
        usize::try_from(value)
            .map(Self)
            .map_err(|_| IdParseError::OutOfRange(trimmed.to_string()))
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for PropertyId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_plain_integers() {
        assert_eq!(PropertyId::parse("0"), Ok(PropertyId(0)));
        assert_eq!(PropertyId::parse(" 12 "), Ok(PropertyId(12)));
    }

    #[test]
    fn test_parse_rejects_garbage_and_negatives() {
        assert!(matches!(PropertyId::parse("abc"), Err(IdParseError::Malformed(_))));
        assert!(matches!(PropertyId::parse(""), Err(IdParseError::Malformed(_))));
        assert!(matches!(PropertyId::parse("1.5"), Err(IdParseError::Malformed(_))));
        assert!(matches!(PropertyId::parse("1abc"), Err(IdParseError::Malformed(_))));
        assert!(matches!(PropertyId::parse("-"), Err(IdParseError::Malformed(_))));
        assert_eq!(PropertyId::parse("-3"), Err(IdParseError::Negative(-3)));
    }

    #[test]
    fn test_parse_huge_integers_are_out_of_range() {
        assert_eq!(
            PropertyId::parse("99999999999999999999"),
            Err(IdParseError::OutOfRange("99999999999999999999".to_string()))
        );
        assert!(matches!(
            PropertyId::parse("-99999999999999999999"),
            Err(IdParseError::OutOfRange(_))
        ));
        assert_eq!(PropertyId::parse("+7"), Ok(PropertyId(7)));
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&PropertyId(4)).unwrap();
        assert_eq!(json, "4");
    }
}
