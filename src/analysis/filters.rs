//! Exclusion filters for text that must never become a heading or title.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}[\-/]\d{1,2}[\-/]\d{2,4}$").expect("valid date pattern"));

static MONTH_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]+\s+\d{1,2},\s*\d{4}\.?$").expect("valid month date pattern")
});

static BARE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.?$").expect("valid number pattern"));

static NUMERIC_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-/:,.]+$").expect("valid numeric noise pattern"));

/// Form-field labels that are never headings.
pub const TRIVIAL_WORDS: &[&str] = &["date", "signature", "page", "pages"];

/// Section labels that are never document titles.
pub const NON_TITLE_WORDS: &[&str] = &[
    "date",
    "signature",
    "page",
    "pages",
    "summary",
    "background",
];

/// Column headers of personal-data tables, matched exactly.
pub const TABLE_HEADERS: &[&str] = &[
    "name",
    "age",
    "s no",
    "s.no",
    "sno",
    "relationship",
    "serial no",
    "sr no",
    "sr.no",
];

/// Adjacent column header combinations, matched as substrings.
pub const TABLE_HEADER_COMBINATIONS: &[&str] = &[
    "name age",
    "age relationship",
    "s.no name",
    "sno name",
    "relationship s.no",
];

/// Check if text is a known tabular column header (case-insensitive).
pub fn is_table_header(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() {
        return false;
    }
    TABLE_HEADERS.contains(&lowered.as_str())
        || TABLE_HEADER_COMBINATIONS
            .iter()
            .any(|combo| lowered.contains(combo))
}

/// Check if text is a numeric date such as `12/05/2024` or `1-2-24`.
pub fn is_numeric_date(text: &str) -> bool {
    NUMERIC_DATE.is_match(text.trim())
}

/// Check if text is a written date such as `March 21, 2003`.
pub fn is_month_date(text: &str) -> bool {
    MONTH_DATE.is_match(text.trim())
}

/// Check if text is a bare number such as `7` or `7.`.
pub fn is_bare_number(text: &str) -> bool {
    BARE_NUMBER.is_match(text.trim())
}

/// Check if text consists only of digits, spaces and date/number punctuation.
pub fn is_numeric_noise(text: &str) -> bool {
    NUMERIC_NOISE.is_match(text)
}

/// Check if text is one of the form-field labels in `words`.
pub fn is_one_of(text: &str, words: &[&str]) -> bool {
    let lowered = text.trim().to_lowercase();
    words.contains(&lowered.as_str())
}

/// Combined exclusion test applied to heading candidates.
pub fn is_excluded(text: &str) -> bool {
    is_table_header(text)
        || is_numeric_date(text)
        || is_month_date(text)
        || is_one_of(text, TRIVIAL_WORDS)
        || is_bare_number(text)
}
