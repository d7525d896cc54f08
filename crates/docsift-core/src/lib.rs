//! Core library for financial document field extraction.
//!
//! This crate provides:
//! - Data models for OCR text extraction results
//! - Per-document-type parsers (paystub, bank statement, tax return) with a
//!   generic fallback, resolved through a registry
//! - Rule-based field extraction strategies with per-strategy confidence
//! - A validation matcher for spot-checking manually entered values against
//!   raw document text

pub mod error;
pub mod models;
pub mod ocr;
pub mod parsers;
pub mod validate;

pub use error::{DocsiftError, OcrError, Result};
pub use models::ocr::{TextBlock, TextExtractionResult};
pub use models::parse::{ExtractedField, FieldValue, ParseResult};
pub use ocr::{OcrHandle, TextRecognizer};
pub use parsers::{
    BankStatementParser, DocumentParser, DocumentType, GenericParser, ParserRegistry,
    PaystubParser, TaxReturnParser,
};
pub use validate::{match_field, ValidationOutcome};
