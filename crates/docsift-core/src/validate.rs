//! Validation matcher: spot-check a manually entered value against raw
//! document text, independent of the document parsers.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of matching a candidate value against document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the candidate value was found in the document.
    pub matches: bool,
    /// The original candidate on a hit, empty on a miss.
    pub extracted_value: String,
    /// 0.9 on a hit, 0.0 on a miss.
    pub confidence: f32,
    /// Human-readable match status.
    pub message: String,
}

/// Check whether a user-supplied value appears in the document text.
///
/// Both sides are normalized by lowercasing and stripping commas and dollar
/// signs, then tested for substring containment. The comparison is
/// deliberately format-sensitive: no tokenization, numeric tolerance, or
/// date canonicalization, so a date or amount must appear in the document in
/// a normalization-equivalent textual form.
///
/// `field_type` is reserved for future type-aware comparison and does not
/// currently alter behavior.
pub fn match_field(raw_text: &str, candidate: &str, field_type: &str) -> ValidationOutcome {
    debug!(field_type, candidate, "validating field against document");

    let normalized_text = normalize(raw_text);
    let normalized_candidate = normalize(candidate);

    if normalized_text.contains(&normalized_candidate) {
        ValidationOutcome {
            matches: true,
            extracted_value: candidate.to_string(),
            confidence: 0.9,
            message: "Value found in document".to_string(),
        }
    } else {
        ValidationOutcome {
            matches: false,
            extracted_value: String::new(),
            confidence: 0.0,
            message: "Value not found in document".to_string(),
        }
    }
}

fn normalize(s: &str) -> String {
    s.to_lowercase().replace([',', '$'], "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formatted_amount_matches_across_separators() {
        let outcome = match_field("Balance: $1,000.00", "1,000", "currency");

        assert!(outcome.matches);
        assert_eq!(outcome.extracted_value, "1,000");
        assert_eq!(outcome.confidence, 0.9);
        assert_eq!(outcome.message, "Value found in document");
    }

    #[test]
    fn absent_value_does_not_match() {
        let outcome = match_field("Balance: $500", "1,000", "currency");

        assert!(!outcome.matches);
        assert_eq!(outcome.extracted_value, "");
        assert_eq!(outcome.confidence, 0.0);
        assert_eq!(outcome.message, "Value not found in document");
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let outcome = match_field("Employer: ACME CORP", "Acme Corp", "text");
        assert!(outcome.matches);
    }

    #[test]
    fn comparison_is_format_sensitive() {
        // Same date, different format: no match by design.
        let outcome = match_field("Pay date 01/15/2024", "2024-01-15", "date");
        assert!(!outcome.matches);
    }

    #[test]
    fn field_type_does_not_alter_behavior() {
        for field_type in ["currency", "date", "text", ""] {
            assert!(match_field("Total $42.00", "42.00", field_type).matches);
        }
    }
}
