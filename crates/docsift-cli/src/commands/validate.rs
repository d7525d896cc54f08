//! Validate command - check a manually entered value against document text.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use docsift_core::match_field;

use super::load_ocr_result;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Input OCR result (.json) or plain text file
    #[arg(required = true)]
    input: PathBuf,

    /// Value to look for in the document
    #[arg(long)]
    value: String,

    /// Field type tag (currency, date, text); reserved
    #[arg(long, default_value = "text")]
    field_type: String,
}

pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let ocr = load_ocr_result(&args.input)?;
    info!(
        "Validating {:?} against {} characters of document text",
        args.value,
        ocr.full_text.len()
    );

    let outcome = match_field(&ocr.full_text, &args.value, &args.field_type);
    println!("{}", serde_json::to_string(&outcome)?);

    Ok(())
}
