//! Tax return parser: adjusted gross income and tax year.

use tracing::debug;

use crate::models::ocr::TextExtractionResult;
use crate::models::parse::{FieldValue, ParseResult};

use super::rules::currency::parse_amount;
use super::rules::patterns::{ADJUSTED_GROSS_INCOME, TAX_YEAR};
use super::{DocumentParser, DocumentType};

/// Expected-field count for the aggregate confidence ratio.
const EXPECTED_FIELDS: f32 = 2.0;

/// Parser for income tax returns.
#[derive(Debug, Default)]
pub struct TaxReturnParser;

impl DocumentParser for TaxReturnParser {
    fn document_type(&self) -> DocumentType {
        DocumentType::TaxReturn
    }

    fn parse(&self, ocr: &TextExtractionResult) -> ParseResult {
        let mut result = ParseResult::default();

        match ADJUSTED_GROSS_INCOME
            .captures(&ocr.full_text)
            .and_then(|caps| parse_amount(&caps[1]))
        {
            Some(agi) => {
                result
                    .extracted_data
                    .insert("agi".to_string(), FieldValue::Amount(agi));
            }
            None => {
                result
                    .warnings
                    .push("Could not find Adjusted Gross Income (AGI)".to_string());
            }
        }

        // Optional field: absence generates no warning.
        if let Some(caps) = TAX_YEAR.captures(&ocr.full_text) {
            result
                .extracted_data
                .insert("tax_year".to_string(), FieldValue::from(&caps[1]));
        }

        result.confidence = result.extracted_data.len() as f32 / EXPECTED_FIELDS;

        debug!(
            fields = result.extracted_data.len(),
            confidence = result.confidence,
            "tax return parse complete"
        );

        result
    }
}
