//! Batch command - extract fields from many OCR results.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};

use docsift_core::ParserRegistry;

use super::extract::ExtractResponse;
use super::load_ocr_result;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for input files
    #[arg(required = true)]
    pattern: String,

    /// Document type tag applied to every file
    #[arg(short = 't', long, default_value = "generic")]
    document_type: String,

    /// Directory for per-file JSON output (default: print a summary line)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let files: Vec<PathBuf> = glob(&args.pattern)?.filter_map(|entry| entry.ok()).collect();

    if files.is_empty() {
        anyhow::bail!("No files match pattern: {}", args.pattern);
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let registry = ParserRegistry::new();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut failures = 0usize;

    for path in &files {
        pb.set_message(path.display().to_string());

        match load_ocr_result(path) {
            Ok(ocr) => {
                let result = registry.resolve(&args.document_type).parse(&ocr);
                let response = ExtractResponse::new(args.document_type.clone(), result);

                if let Some(dir) = &args.output_dir {
                    let stem = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("output");
                    fs::write(
                        dir.join(format!("{}.json", stem)),
                        serde_json::to_string_pretty(&response)?,
                    )?;
                } else {
                    pb.println(format!(
                        "{}: {} fields, confidence {:.2}",
                        path.display(),
                        response.extracted_data.len(),
                        response.confidence
                    ));
                }
            }
            Err(e) => {
                failures += 1;
                pb.println(format!(
                    "{} {}: {}",
                    style("error").red(),
                    path.display(),
                    e
                ));
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    println!(
        "{} {} processed, {} failed",
        style("✓").green(),
        files.len() - failures,
        failures
    );

    Ok(())
}
