//! Document parsers and the registry that resolves a type tag to one.

mod bank_statement;
mod generic;
mod paystub;
mod tax_return;
pub mod rules;

pub use bank_statement::BankStatementParser;
pub use generic::GenericParser;
pub use paystub::PaystubParser;
pub use tax_return::TaxReturnParser;

use serde::{Deserialize, Serialize};

use crate::models::ocr::TextExtractionResult;
use crate::models::parse::ParseResult;

/// Supported document types, with a catch-all for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Wage statement.
    Paystub,
    /// Bank account statement.
    BankStatement,
    /// Income tax return.
    TaxReturn,
    /// Anything else: only the raw text is returned.
    Generic,
}

impl DocumentType {
    /// Map a caller-supplied tag to a document type.
    ///
    /// Unknown tags resolve to [`DocumentType::Generic`]; an unrecognized
    /// tag is not an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "paystub" => Self::Paystub,
            "bank_statement" => Self::BankStatement,
            "tax_return" => Self::TaxReturn,
            _ => Self::Generic,
        }
    }

    /// The canonical tag for this document type.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Paystub => "paystub",
            Self::BankStatement => "bank_statement",
            Self::TaxReturn => "tax_return",
            Self::Generic => "generic",
        }
    }
}

/// Shared capability of all document parsers.
///
/// Parsers are stateless and hold no mutable state; they are safe to invoke
/// concurrently and repeatedly.
pub trait DocumentParser: Send + Sync {
    /// The document type this parser handles.
    fn document_type(&self) -> DocumentType;

    /// Extract structured fields from one OCR result.
    fn parse(&self, ocr: &TextExtractionResult) -> ParseResult;
}

/// Resolves a document-type tag to its parser.
///
/// Built once at startup; one instance of each parser is shared across
/// requests.
#[derive(Debug, Default)]
pub struct ParserRegistry {
    paystub: PaystubParser,
    bank_statement: BankStatementParser,
    tax_return: TaxReturnParser,
    generic: GenericParser,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the parser for a tag.
    ///
    /// Unknown tags fall back to the generic parser rather than erroring.
    pub fn resolve(&self, document_type: &str) -> &dyn DocumentParser {
        match DocumentType::from_tag(document_type) {
            DocumentType::Paystub => &self.paystub,
            DocumentType::BankStatement => &self.bank_statement,
            DocumentType::TaxReturn => &self.tax_return,
            DocumentType::Generic => &self.generic,
        }
    }
}
