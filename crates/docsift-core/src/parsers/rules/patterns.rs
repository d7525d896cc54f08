//! Common regex patterns for financial document field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Labeled employee name. The label is case-insensitive, the name itself
    // must be a Title-Case run of at least two words.
    pub static ref LABELED_EMPLOYEE: Regex = Regex::new(
        r"(?i:(?:employee|emp)(?:\s+name)?):\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)"
    ).unwrap();

    pub static ref LABELED_NAME: Regex = Regex::new(
        r"(?i:name):\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)"
    ).unwrap();

    // A bare Title-Case personal name: 2-4 words, no digits.
    pub static ref TITLE_CASE_NAME: Regex = Regex::new(
        r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3}$"
    ).unwrap();

    // Text composed solely of digits, whitespace, and currency punctuation.
    pub static ref NUMERIC_ONLY: Regex = Regex::new(
        r"^[\d\s$.,]+$"
    ).unwrap();

    // Pay period range: "Pay Period: 01/01/2024 - 01/15/2024".
    pub static ref PAY_PERIOD: Regex = Regex::new(
        r"(?i)pay\s+period[:\s]+([\d/]+)\s*[-–]\s*([\d/]+)"
    ).unwrap();

    // Bank statement fields.
    pub static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"(?i)account\s*(?:number|#)?[:.\s]*(\d{4,16})"
    ).unwrap();

    pub static ref ENDING_BALANCE: Regex = Regex::new(
        r"(?i)(?:ending|current)\s*balance[:.\s]*\$?\s?([\d,]+\.?\d{0,2})"
    ).unwrap();

    // Tax return fields.
    pub static ref ADJUSTED_GROSS_INCOME: Regex = Regex::new(
        r"(?i)adjusted\s*gross\s*income[:.\s]*\$?\s?([\d,]+)"
    ).unwrap();

    // A bare four-digit tax year.
    pub static ref TAX_YEAR: Regex = Regex::new(
        r"\b(20\d{2})\b"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_employee_requires_title_case_name() {
        let caps = LABELED_EMPLOYEE.captures("EMPLOYEE: John Smith").unwrap();
        assert_eq!(&caps[1], "John Smith");

        assert!(LABELED_EMPLOYEE.captures("Employee: john smith").is_none());
    }

    #[test]
    fn title_case_name_rejects_digits_and_long_runs() {
        assert!(TITLE_CASE_NAME.is_match("John Smith"));
        assert!(TITLE_CASE_NAME.is_match("Mary Jane Watson Parker"));
        assert!(!TITLE_CASE_NAME.is_match("John"));
        assert!(!TITLE_CASE_NAME.is_match("John Smith 2024"));
        assert!(!TITLE_CASE_NAME.is_match("One Two Three Four Five"));
    }

    #[test]
    fn pay_period_accepts_hyphen_and_en_dash() {
        for sep in ["-", "–"] {
            let text = format!("Pay Period: 01/01/2024 {} 01/15/2024", sep);
            let caps = PAY_PERIOD.captures(&text).unwrap();
            assert_eq!(&caps[1], "01/01/2024");
            assert_eq!(&caps[2], "01/15/2024");
        }
    }

    #[test]
    fn tax_year_is_word_bounded() {
        assert_eq!(&TAX_YEAR.captures("Form 1040 for 2023").unwrap()[1], "2023");
        assert!(TAX_YEAR.captures("account 120234567").is_none());
    }

    #[test]
    fn account_number_accepts_label_variants() {
        for text in [
            "Account Number: 12345678",
            "Account #: 12345678",
            "account 12345678",
        ] {
            let caps = ACCOUNT_NUMBER.captures(text).unwrap();
            assert_eq!(&caps[1], "12345678");
        }
    }
}
