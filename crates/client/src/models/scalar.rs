use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a point lookup.
///
/// The service's "not available" marker is normalized to [`Scalar::Missing`]
/// at the response boundary; callers never see the literal marker text.
/// Absence of a data point is an expected outcome, not an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Scalar {
    /// A numeric field value.
    Number(Decimal),

    /// A textual field value (e.g. a name or a rating).
    Text(String),

    /// No value available for this instrument/field pair.
    Missing,
}

impl Scalar {
    /// The numeric value, if this scalar is numeric.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The textual value, if this scalar is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Whether this scalar is the missing-value marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}
