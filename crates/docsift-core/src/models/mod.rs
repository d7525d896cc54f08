//! Data models: OCR input contract and extraction output contract.

pub mod ocr;
pub mod parse;
