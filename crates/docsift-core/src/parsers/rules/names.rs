//! Employer and employee-name extraction strategies.

use crate::models::ocr::TextBlock;

use super::patterns::{LABELED_EMPLOYEE, LABELED_NAME, NUMERIC_ONLY, TITLE_CASE_NAME};
use super::FieldMatch;

/// How many leading blocks the employer scan covers.
const EMPLOYER_SCAN_BLOCKS: usize = 5;

/// How many leading blocks the positional name scan covers.
const NAME_SCAN_BLOCKS: usize = 10;

/// Tokens marking a block as a company name or document header rather than a
/// person.
const NON_PERSON_TOKENS: [&str; 6] = ["inc", "llc", "corp", "company", "paystub", "statement"];

/// Employer strategy: the first substantial block near the top of the
/// document.
///
/// A block qualifies when its trimmed text is longer than 3 characters and
/// is not composed solely of digits, whitespace, and currency punctuation.
pub fn find_employer(blocks: &[TextBlock]) -> Option<FieldMatch<String>> {
    for block in blocks.iter().take(EMPLOYER_SCAN_BLOCKS) {
        let text = block.text.trim();
        if text.len() > 3 && !NUMERIC_ONLY.is_match(text) {
            return Some(FieldMatch::new(text.to_string(), 0.8, "leading_block"));
        }
    }

    None
}

/// Employee-name cascade: labeled match first, positional fallback second.
pub fn find_employee_name(blocks: &[TextBlock], full_text: &str) -> Option<FieldMatch<String>> {
    // Strategy 1: explicit label ("Employee: John Smith").
    for pattern in [&*LABELED_EMPLOYEE, &*LABELED_NAME] {
        if let Some(caps) = pattern.captures(full_text) {
            let name = caps[1].trim().to_string();
            // Needs at least a first and last name.
            if name.split_whitespace().count() >= 2 {
                return Some(FieldMatch::new(name, 0.9, "labeled_name"));
            }
        }
    }

    // Strategy 2: a bare Title-Case block near the top that is not a company
    // name or document header.
    for block in blocks.iter().take(NAME_SCAN_BLOCKS) {
        let text = block.text.trim();
        if TITLE_CASE_NAME.is_match(text) && !contains_non_person_token(text) {
            return Some(FieldMatch::new(text.to_string(), 0.7, "positional_name"));
        }
    }

    None
}

fn contains_non_person_token(text: &str) -> bool {
    text.split_whitespace()
        .any(|word| NON_PERSON_TOKENS.contains(&word.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(text: &str) -> TextBlock {
        TextBlock::new(text, 0.95, [0, 0, 100, 20], 1)
    }

    #[test]
    fn employer_takes_first_substantial_block() {
        let blocks = vec![block("$1,234.00"), block("Acme Corp"), block("John Smith")];

        let hit = find_employer(&blocks).unwrap();
        assert_eq!(hit.value, "Acme Corp");
        assert_eq!(hit.confidence, 0.8);
        assert_eq!(hit.strategy, "leading_block");
    }

    #[test]
    fn employer_scan_stops_after_five_blocks() {
        let mut blocks = vec![block("123"); 5];
        blocks.push(block("Acme Corp"));

        assert!(find_employer(&blocks).is_none());
    }

    #[test]
    fn employer_skips_short_text() {
        let blocks = vec![block("AB"), block("Initech Industries")];
        assert_eq!(find_employer(&blocks).unwrap().value, "Initech Industries");
    }

    #[test]
    fn labeled_name_wins_over_positional() {
        let blocks = vec![block("Jane Doe")];
        let hit = find_employee_name(&blocks, "Employee: John Smith").unwrap();

        assert_eq!(hit.value, "John Smith");
        assert_eq!(hit.confidence, 0.9);
        assert_eq!(hit.strategy, "labeled_name");
    }

    #[test]
    fn positional_name_used_when_no_label_matches() {
        let blocks = vec![block("ACME PAYROLL"), block("John Smith")];
        let hit = find_employee_name(&blocks, "ACME PAYROLL John Smith").unwrap();

        assert_eq!(hit.value, "John Smith");
        assert_eq!(hit.confidence, 0.7);
        assert_eq!(hit.strategy, "positional_name");
    }

    #[test]
    fn positional_name_excludes_company_and_header_blocks() {
        let blocks = vec![block("Initech Llc"), block("Paystub Statement")];
        assert!(find_employee_name(&blocks, "no labels here").is_none());
    }

    #[test]
    fn positional_scan_stops_after_ten_blocks() {
        let mut blocks = vec![block("HEADER"); 10];
        blocks.push(block("John Smith"));

        assert!(find_employee_name(&blocks, "no labels").is_none());
    }
}
