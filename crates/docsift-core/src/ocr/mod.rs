//! Consumer-side contract for the external OCR engine.
//!
//! The engine is a process-wide collaborator: loaded once, expensive to
//! construct, and not assumed safe for concurrent invocation. The parsing
//! layer itself has no such restriction.

use std::sync::Mutex;

use tracing::debug;

use crate::error::OcrError;
use crate::models::ocr::TextExtractionResult;

/// Black-box OCR engine contract.
///
/// Implementations recognize a document's bytes (image or rasterized page)
/// into ordered text blocks.
pub trait TextRecognizer {
    fn recognize(
        &mut self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<TextExtractionResult, OcrError>;
}

/// Process-wide handle that serializes access to the OCR engine.
///
/// The engine's internal concurrency safety is unknown, so all recognition
/// goes through one mutex. Callers share the handle by reference across
/// in-flight requests.
pub struct OcrHandle<R> {
    inner: Mutex<R>,
}

impl<R: TextRecognizer> OcrHandle<R> {
    /// Wrap an engine that has already been constructed and loaded.
    pub fn new(recognizer: R) -> Self {
        Self {
            inner: Mutex::new(recognizer),
        }
    }

    /// Run recognition under the engine lock.
    pub fn recognize(
        &self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<TextExtractionResult, OcrError> {
        debug!(filename, len = bytes.len(), "acquiring OCR engine");

        // Recover the guard if a previous caller panicked mid-recognition.
        let mut recognizer = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        recognizer.recognize(bytes, filename)
    }
}
