//! Paystub parser: employer, employee name, pay amounts, pay period.

use tracing::debug;

use crate::models::ocr::TextExtractionResult;
use crate::models::parse::{ExtractedField, ParseResult};

use super::rules::currency::{GROSS_PAY, NET_PAY, YTD_GROSS};
use super::rules::names::{find_employee_name, find_employer};
use super::rules::patterns::PAY_PERIOD;
use super::{DocumentParser, DocumentType};

/// Expected-field count for the aggregate confidence ratio: employer,
/// employee name, gross pay, net pay, pay period.
const EXPECTED_FIELDS: f32 = 5.0;

/// Parser for wage statements.
#[derive(Debug, Default)]
pub struct PaystubParser;

impl DocumentParser for PaystubParser {
    fn document_type(&self) -> DocumentType {
        DocumentType::Paystub
    }

    fn parse(&self, ocr: &TextExtractionResult) -> ParseResult {
        let mut result = ParseResult::default();

        if ocr.full_text.is_empty() {
            result
                .warnings
                .push("No text extracted from document".to_string());
            return result;
        }

        if let Some(hit) = find_employer(&ocr.blocks) {
            result.insert(ExtractedField::new(
                "employer",
                hit.value,
                hit.confidence,
                hit.strategy,
            ));
        } else {
            result
                .warnings
                .push("Could not identify employer name".to_string());
        }

        if let Some(hit) = find_employee_name(&ocr.blocks, &ocr.full_text) {
            result.insert(ExtractedField::new(
                "employee_name",
                hit.value,
                hit.confidence,
                hit.strategy,
            ));
        } else {
            result
                .warnings
                .push("Could not identify employee name".to_string());
        }

        if let Some(hit) = GROSS_PAY.find(&ocr.full_text) {
            result.insert(ExtractedField::new(
                "gross_pay",
                hit.value,
                hit.confidence,
                hit.strategy,
            ));
        } else {
            result
                .warnings
                .push("Could not find gross pay amount".to_string());
        }

        if let Some(hit) = NET_PAY.find(&ocr.full_text) {
            result.insert(ExtractedField::new(
                "net_pay",
                hit.value,
                hit.confidence,
                hit.strategy,
            ));
        } else {
            result
                .warnings
                .push("Could not find net pay amount".to_string());
        }

        // Optional field: absence generates no warning.
        if let Some(hit) = YTD_GROSS.find(&ocr.full_text) {
            result.insert(ExtractedField::new(
                "ytd_gross",
                hit.value,
                hit.confidence,
                hit.strategy,
            ));
        }

        // Both dates are emitted as one unit, as captured.
        if let Some(caps) = PAY_PERIOD.captures(&ocr.full_text) {
            result.insert(ExtractedField::new(
                "pay_period_start",
                &caps[1],
                1.0,
                "pay_period_range",
            ));
            result.insert(ExtractedField::new(
                "pay_period_end",
                &caps[2],
                1.0,
                "pay_period_range",
            ));
        }

        // Completeness ratio over the expected-field count, clamped so the
        // seven possible map entries cannot push it past 1.0.
        result.confidence = (result.extracted_data.len() as f32 / EXPECTED_FIELDS).min(1.0);

        debug!(
            fields = result.extracted_data.len(),
            confidence = result.confidence,
            warnings = result.warnings.len(),
            "paystub parse complete"
        );

        result
    }
}
