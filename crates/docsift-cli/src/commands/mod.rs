//! CLI subcommands.

pub mod batch;
pub mod extract;
pub mod validate;

use std::fs;
use std::path::Path;

use docsift_core::{Result, TextBlock, TextExtractionResult};

/// Load an OCR result from disk.
///
/// `.json` files are deserialized as a full [`TextExtractionResult`];
/// anything else is read as plain text, one block per non-empty line.
pub fn load_ocr_result(path: &Path) -> Result<TextExtractionResult> {
    let raw = fs::read_to_string(path)?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension == "json" {
        Ok(serde_json::from_str(&raw)?)
    } else {
        let blocks = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| TextBlock::new(line, 1.0, [0, 0, 0, 0], 1))
            .collect();
        Ok(TextExtractionResult::from_blocks(blocks, 1))
    }
}
