//! Input contract from the OCR collaborator.

use serde::{Deserialize, Serialize};

/// A recognized text span with its confidence and on-page location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,

    /// Axis-aligned bounding box (x1, y1, x2, y2).
    pub bbox: [i32; 4],

    /// 1-based page number the span was recognized on.
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl TextBlock {
    /// Create a text block.
    pub fn new(text: impl Into<String>, confidence: f32, bbox: [i32; 4], page: u32) -> Self {
        Self {
            text: text.into(),
            confidence,
            bbox,
            page,
        }
    }
}

/// The complete OCR output for one document.
///
/// Blocks are in reading/recognition order; the positional heuristics in the
/// parsers depend on that order. `full_text` is the block texts joined by
/// single spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextExtractionResult {
    /// Recognized text blocks in reading order.
    pub blocks: Vec<TextBlock>,

    /// All block texts joined by single spaces.
    pub full_text: String,

    /// Number of pages in the source document.
    #[serde(default = "default_page")]
    pub page_count: u32,
}

impl TextExtractionResult {
    /// Build a result from recognized blocks, deriving `full_text`.
    pub fn from_blocks(blocks: Vec<TextBlock>, page_count: u32) -> Self {
        let full_text = blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            blocks,
            full_text,
            page_count,
        }
    }

    /// Whether recognition produced any text at all.
    pub fn is_empty(&self) -> bool {
        self.full_text.is_empty()
    }
}
