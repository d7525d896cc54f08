//! Labeled currency-amount extraction.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use super::FieldMatch;

/// Confidence assigned to a labeled amount hit.
const LABELED_AMOUNT_CONFIDENCE: f32 = 0.85;

/// Ordered label-synonym cascade for one currency field.
///
/// Each synonym compiles to `<label><0-20 non-digit, non-$ chars><optional
/// $><amount>`. Synonyms are tried in priority order and the first match
/// wins.
pub struct LabeledAmount {
    strategy: &'static str,
    patterns: Vec<Regex>,
}

impl LabeledAmount {
    pub fn new(strategy: &'static str, labels: &[&str]) -> Self {
        let patterns = labels
            .iter()
            .map(|label| {
                Regex::new(&format!(
                    r"(?i){}[^$\d]{{0,20}}\$?\s?([\d,]+\.?\d{{0,2}})",
                    regex::escape(label)
                ))
                .unwrap()
            })
            .collect();

        Self { strategy, patterns }
    }

    /// Find the first labeled amount in `text`.
    ///
    /// A capture that fails to parse as a decimal is treated as no match;
    /// the cascade moves on to the next synonym.
    pub fn find(&self, text: &str) -> Option<FieldMatch<Decimal>> {
        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(text) {
                if let Some(amount) = parse_amount(&caps[1]) {
                    return Some(FieldMatch::new(
                        amount,
                        LABELED_AMOUNT_CONFIDENCE,
                        self.strategy,
                    ));
                }
            }
        }

        None
    }
}

lazy_static! {
    pub static ref GROSS_PAY: LabeledAmount = LabeledAmount::new(
        "labeled_amount:gross_pay",
        &["gross pay", "total gross", "gross earnings"],
    );

    pub static ref NET_PAY: LabeledAmount = LabeledAmount::new(
        "labeled_amount:net_pay",
        &["net pay", "take home", "net amount"],
    );

    pub static ref YTD_GROSS: LabeledAmount = LabeledAmount::new(
        "labeled_amount:ytd_gross",
        &["ytd gross", "year to date gross", "ytd earnings"],
    );
}

/// Parse a captured amount, stripping thousands separators.
///
/// A capture may end with a bare decimal point when the OCR pass dropped the
/// cents; the trailing point is ignored.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned = raw.replace(',', "");
    let cleaned = cleaned.strip_suffix('.').unwrap_or(&cleaned);
    Decimal::from_str(cleaned).ok()
}
