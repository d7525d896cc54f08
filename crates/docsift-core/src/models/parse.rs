//! Output contract: extracted fields and per-document parse results.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single extracted field value: free text or a monetary/numeric amount.
///
/// Serialized untagged, so JSON output carries plain strings and numbers.
/// `Text` is tried first on deserialization; numeric-looking strings stay
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free-form text.
    Text(String),
    /// Monetary or numeric amount.
    Amount(Decimal),
}

impl FieldValue {
    /// Borrow the text value, if this is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Amount(_) => None,
        }
    }

    /// Copy the amount, if this is an amount field.
    pub fn as_amount(&self) -> Option<Decimal> {
        match self {
            Self::Amount(d) => Some(*d),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Decimal> for FieldValue {
    fn from(d: Decimal) -> Self {
        Self::Amount(d)
    }
}

/// A field produced by one extraction strategy, before aggregation.
///
/// Only the name and value survive into the [`ParseResult`]. The confidence
/// and strategy identifier record which attempt fired; they are not folded
/// into the document-level aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedField {
    /// Field name, unique within one parse.
    pub name: String,
    /// Extracted value.
    pub value: FieldValue,
    /// Confidence of the strategy that produced the value (0.0 - 1.0).
    pub confidence: f32,
    /// Identifier of the strategy that fired.
    pub strategy: &'static str,
}

impl ExtractedField {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<FieldValue>,
        confidence: f32,
        strategy: &'static str,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            confidence,
            strategy,
        }
    }
}

/// Result of parsing one document.
///
/// Created fresh per parse call and never mutated after return. Persistence
/// is a caller concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Extracted field values, keyed by field name.
    pub extracted_data: BTreeMap<String, FieldValue>,

    /// Document-level aggregate confidence (0.0 - 1.0).
    ///
    /// A completeness ratio: populated fields over the parser's expected
    /// field count. Independent of the per-strategy confidences.
    pub confidence: f32,

    /// Human-readable notes, one per expected field that could not be found.
    pub warnings: Vec<String>,

    /// Reserved for follow-up hints; currently always empty.
    pub suggestions: Vec<String>,
}

impl ParseResult {
    /// Record a strategy hit, keeping only the name and value.
    pub fn insert(&mut self, field: ExtractedField) {
        debug!(
            field = %field.name,
            strategy = field.strategy,
            confidence = field.confidence,
            "field extracted"
        );
        self.extracted_data.insert(field.name, field.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn field_values_serialize_untagged() {
        let mut result = ParseResult::default();
        result.insert(ExtractedField::new("employer", "Acme Corp", 0.8, "leading_block"));
        result.insert(ExtractedField::new(
            "gross_pay",
            Decimal::from_str("1234.56").unwrap(),
            0.85,
            "labeled_amount",
        ));
        result.confidence = 0.4;

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""employer":"Acme Corp""#));
        assert!(json.contains(r#""gross_pay":1234.56"#));
    }

    #[test]
    fn insert_deduplicates_by_name() {
        let mut result = ParseResult::default();
        result.insert(ExtractedField::new("employer", "First", 0.8, "a"));
        result.insert(ExtractedField::new("employer", "Second", 0.7, "b"));

        assert_eq!(result.extracted_data.len(), 1);
        assert_eq!(
            result.extracted_data["employer"],
            FieldValue::Text("Second".to_string())
        );
    }

    #[test]
    fn numeric_json_deserializes_as_amount() {
        let value: FieldValue = serde_json::from_str("52000.0").unwrap();
        assert_eq!(value.as_amount(), Some(Decimal::from_str("52000").unwrap()));

        let value: FieldValue = serde_json::from_str(r#""2023""#).unwrap();
        assert_eq!(value.as_text(), Some("2023"));
    }
}
