use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const PAYSTUB_JSON: &str = r#"{
    "blocks": [
        {"text": "Acme Corp", "confidence": 0.98, "bbox": [10, 10, 200, 40], "page": 1},
        {"text": "Gross Pay: $1,234.56", "confidence": 0.97, "bbox": [10, 50, 260, 80], "page": 1},
        {"text": "Net Pay: $987.65", "confidence": 0.96, "bbox": [10, 90, 240, 120], "page": 1},
        {"text": "Employee: John Smith", "confidence": 0.95, "bbox": [10, 130, 260, 160], "page": 1}
    ],
    "full_text": "Acme Corp Gross Pay: $1,234.56 Net Pay: $987.65 Employee: John Smith",
    "page_count": 1
}"#;

#[test]
fn extract_paystub_from_json() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "paystub.json", PAYSTUB_JSON);

    Command::cargo_bin("docsift")
        .unwrap()
        .arg("extract")
        .arg(&input)
        .args(["--document-type", "paystub"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""document_type":"paystub""#))
        .stdout(predicate::str::contains(r#""employer":"Acme Corp""#))
        .stdout(predicate::str::contains(r#""employee_name":"John Smith""#))
        .stdout(predicate::str::contains(r#""gross_pay":1234.56"#));
}

#[test]
fn extract_reads_plain_text_files() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "statement.txt",
        "Account Number: 123456789\nEnding Balance: $4,321.09\n",
    );

    Command::cargo_bin("docsift")
        .unwrap()
        .arg("extract")
        .arg(&input)
        .args(["--document-type", "bank_statement"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""account_number":"123456789""#))
        .stdout(predicate::str::contains(r#""confidence":1.0"#));
}

#[test]
fn unknown_document_type_falls_back_to_generic() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "letter.txt", "To whom it may concern\n");

    Command::cargo_bin("docsift")
        .unwrap()
        .arg("extract")
        .arg(&input)
        .args(["--document-type", "mortgage"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""raw_text""#))
        .stdout(predicate::str::contains(
            "Document type unknown - returning raw text only",
        ));
}

#[test]
fn validate_reports_match_status() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "statement.txt", "Balance: $1,000.00\n");

    Command::cargo_bin("docsift")
        .unwrap()
        .arg("validate")
        .arg(&input)
        .args(["--value", "1,000", "--field-type", "currency"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""matches":true"#))
        .stdout(predicate::str::contains(r#""confidence":0.9"#));

    Command::cargo_bin("docsift")
        .unwrap()
        .arg("validate")
        .arg(&input)
        .args(["--value", "9,999"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""matches":false"#))
        .stdout(predicate::str::contains("Value not found in document"));
}

#[test]
fn missing_input_fails_with_message() {
    Command::cargo_bin("docsift")
        .unwrap()
        .args(["extract", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}
