//! Bank statement parser: account number and ending balance.

use tracing::debug;

use crate::models::ocr::TextExtractionResult;
use crate::models::parse::{FieldValue, ParseResult};

use super::rules::currency::parse_amount;
use super::rules::patterns::{ACCOUNT_NUMBER, ENDING_BALANCE};
use super::{DocumentParser, DocumentType};

/// Expected-field count for the aggregate confidence ratio.
const EXPECTED_FIELDS: f32 = 2.0;

/// Parser for bank account statements.
#[derive(Debug, Default)]
pub struct BankStatementParser;

impl DocumentParser for BankStatementParser {
    fn document_type(&self) -> DocumentType {
        DocumentType::BankStatement
    }

    fn parse(&self, ocr: &TextExtractionResult) -> ParseResult {
        let mut result = ParseResult::default();

        if let Some(caps) = ACCOUNT_NUMBER.captures(&ocr.full_text) {
            result
                .extracted_data
                .insert("account_number".to_string(), FieldValue::from(&caps[1]));
        }

        if let Some(amount) = ENDING_BALANCE
            .captures(&ocr.full_text)
            .and_then(|caps| parse_amount(&caps[1]))
        {
            result
                .extracted_data
                .insert("ending_balance".to_string(), FieldValue::Amount(amount));
        }

        result.confidence = result.extracted_data.len() as f32 / EXPECTED_FIELDS;

        debug!(
            fields = result.extracted_data.len(),
            confidence = result.confidence,
            "bank statement parse complete"
        );

        result
    }
}
