//! Rule-based field extraction strategies shared by the document parsers.
//!
//! Each field is extracted by an ordered cascade of independent strategies;
//! every strategy returns an optional [`FieldMatch`] with its own confidence,
//! and the first success wins.

pub mod currency;
pub mod names;
pub mod patterns;

pub use currency::{parse_amount, LabeledAmount};

/// A successful extraction attempt for one field.
///
/// Carries the confidence of the strategy that fired. The document parsers
/// keep this separate from their aggregate confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Strategy confidence (0.0 - 1.0).
    pub confidence: f32,
    /// Identifier of the strategy that produced the value.
    pub strategy: &'static str,
}

impl<T> FieldMatch<T> {
    pub fn new(value: T, confidence: f32, strategy: &'static str) -> Self {
        Self {
            value,
            confidence,
            strategy,
        }
    }
}
