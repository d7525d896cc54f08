//! Generic fallback parser for unrecognized document types.

use crate::models::ocr::TextExtractionResult;
use crate::models::parse::{FieldValue, ParseResult};

use super::{DocumentParser, DocumentType};

/// Fixed confidence reported for a raw-text fallback.
const FALLBACK_CONFIDENCE: f32 = 0.5;

/// Fallback parser: returns the raw text as the only field.
#[derive(Debug, Default)]
pub struct GenericParser;

impl DocumentParser for GenericParser {
    fn document_type(&self) -> DocumentType {
        DocumentType::Generic
    }

    fn parse(&self, ocr: &TextExtractionResult) -> ParseResult {
        let mut result = ParseResult::default();

        result.extracted_data.insert(
            "raw_text".to_string(),
            FieldValue::Text(ocr.full_text.clone()),
        );
        result.confidence = FALLBACK_CONFIDENCE;
        result
            .warnings
            .push("Document type unknown - returning raw text only".to_string());

        result
    }
}
