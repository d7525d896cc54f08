//! Error types for the docsift-core library.

use thiserror::Error;

/// Main error type for the docsift library.
///
/// Field extraction itself never fails; the worst outcome for any field is
/// its absence plus a warning on the parse result. Errors here come from the
/// OCR collaborator and from loading its output.
#[derive(Error, Debug)]
pub enum DocsiftError {
    /// OCR collaborator error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by the external OCR recognizer.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine failed to initialize or load its models.
    #[error("failed to initialize OCR engine: {0}")]
    Init(String),

    /// Recognition failed for the given input.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Input bytes are not a supported document format.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),
}

/// Result type for the docsift library.
pub type Result<T> = std::result::Result<T, DocsiftError>;
