//! Extract command - parse a single OCR result into structured fields.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use docsift_core::{FieldValue, ParseResult, ParserRegistry};

use super::load_ocr_result;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input OCR result (.json) or plain text file
    #[arg(required = true)]
    input: PathBuf,

    /// Document type tag (paystub, bank_statement, tax_return, generic)
    #[arg(short = 't', long, default_value = "generic")]
    document_type: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// Response body: the parse result paired with the echoed document type.
#[derive(Serialize)]
pub struct ExtractResponse {
    pub document_type: String,
    pub extracted_data: BTreeMap<String, FieldValue>,
    pub confidence: f32,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ExtractResponse {
    pub fn new(document_type: String, result: ParseResult) -> Self {
        Self {
            document_type,
            extracted_data: result.extracted_data,
            confidence: result.confidence,
            warnings: result.warnings,
            suggestions: result.suggestions,
        }
    }
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let ocr = load_ocr_result(&args.input)?;
    info!(
        "Loaded {} text blocks from {}",
        ocr.blocks.len(),
        args.input.display()
    );

    let registry = ParserRegistry::new();
    let result = registry.resolve(&args.document_type).parse(&ocr);

    info!(
        "Extraction complete: {} fields, confidence {:.2}",
        result.extracted_data.len(),
        result.confidence
    );

    let response = ExtractResponse::new(args.document_type, result);
    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };

    match &args.output {
        Some(path) => fs::write(path, output)?,
        None => println!("{}", output),
    }

    Ok(())
}
