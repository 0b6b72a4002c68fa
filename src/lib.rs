//! # pdfoutline
//!
//! Structured outline extraction from PDF layout data.
//!
//! This library infers a document title and a leveled (H1-H4) heading list
//! from per-line text and font metadata produced by an external PDF layout
//! parser. It never parses PDF bytes itself.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{outline_file, render, JsonFormat, OutlineOptions};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     // Load a layout dump and extract its outline
//!     let outline = outline_file("report.json", &OutlineOptions::default())?;
//!
//!     // Serialize as {"title": ..., "outline": [...]}
//!     let json = render::to_json(&outline, JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Language profiling**: script and diacritic signals for 12 languages
//! - **Heading heuristics**: bold, size, capitalization and vocabulary rules
//! - **Multi-line headings**: adjacent fragments are merged
//! - **Title synthesis**: multi-fragment titles on the first pages
//! - **Batch processing**: uses Rayon for directories of layout dumps

pub mod analysis;
pub mod batch;
pub mod error;
pub mod language;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analysis::{
    HeadingClassifier, HeadingSignal, OutlineExtractor, OutlineOptions, TextSanity,
    VocabularyMatcher,
};
pub use batch::{process_directory, BatchRecord, BatchReport};
pub use error::{Error, Result};
pub use language::{Language, LanguageProfile};
pub use model::{
    HeadingLevel, LayoutChar, LayoutDocument, LayoutLine, LayoutPage, LineRecord, Outline,
    OutlineEntry, TextContainer,
};
pub use render::JsonFormat;

use std::fs;
use std::path::Path;

/// Extract an outline from a stream of layout pages.
///
/// # Arguments
///
/// * `pages` - Pages in document order; an `Err` item aborts extraction
/// * `full_text` - Full document text for language profiling
/// * `options` - Extraction options
///
/// # Example
///
/// ```
/// use pdfoutline::{extract_outline, LayoutLine, LayoutPage, OutlineOptions};
///
/// let mut page = LayoutPage::new();
/// page.add_line(LayoutLine::uniform("Quarterly Results Overview", 700.0, "Arial-Bold", 22.0));
/// let outline = extract_outline(vec![Ok(page)], None, &OutlineOptions::default())?;
/// assert_eq!(outline.title, "Quarterly Results Overview");
/// # Ok::<(), pdfoutline::Error>(())
/// ```
pub fn extract_outline<I>(
    pages: I,
    full_text: Option<&str>,
    options: &OutlineOptions,
) -> Result<Outline>
where
    I: IntoIterator<Item = Result<LayoutPage>>,
{
    OutlineExtractor::with_options(options.clone()).extract(pages, full_text)
}

/// Extract an outline from a JSON layout dump.
///
/// # Example
///
/// ```
/// use pdfoutline::{extract_from_json, OutlineOptions};
///
/// let outline = extract_from_json(r#"{"pages": []}"#, &OutlineOptions::default())?;
/// assert!(outline.title.is_empty());
/// # Ok::<(), pdfoutline::Error>(())
/// ```
pub fn extract_from_json(json: &str, options: &OutlineOptions) -> Result<Outline> {
    let doc = LayoutDocument::from_json(json)?;
    OutlineExtractor::with_options(options.clone()).extract_document(&doc)
}

/// Load a layout dump file and extract its outline.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{outline_file, OutlineOptions};
///
/// let outline = outline_file("report.json", &OutlineOptions::default()).unwrap();
/// println!("{} headings", outline.len());
/// ```
pub fn outline_file<P: AsRef<Path>>(path: P, options: &OutlineOptions) -> Result<Outline> {
    let json = fs::read_to_string(path)?;
    extract_from_json(&json, options)
}

/// Profile the languages of a text.
///
/// # Example
///
/// ```
/// use pdfoutline::{detect_language, Language};
///
/// let profile = detect_language("Привет, как дела? Это тестовый документ.");
/// assert_eq!(profile.primary, Language::Russian);
/// ```
pub fn detect_language(text: &str) -> LanguageProfile {
    LanguageProfile::detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_page() -> LayoutPage {
        let mut page = LayoutPage::new();
        page.add_line(LayoutLine::uniform(
            "Annual Report 2024",
            700.0,
            "Helvetica-Bold",
            24.0,
        ));
        page.add_line(LayoutLine::uniform(
            "Revenue grew in every region this year.",
            650.0,
            "Helvetica",
            11.0,
        ));
        page
    }

    #[test]
    fn test_extract_outline_stream() {
        let outline =
            extract_outline(vec![Ok(report_page())], None, &OutlineOptions::default()).unwrap();
        assert_eq!(outline.title, "Annual Report 2024");
        assert!(outline.outline.is_empty());
    }

    #[test]
    fn test_extract_outline_propagates_page_error() {
        let pages = vec![
            Ok(report_page()),
            Err(Error::Layout("broken content stream".to_string())),
        ];
        let result = extract_outline(pages, None, &OutlineOptions::default());
        assert!(matches!(result, Err(Error::Layout(_))));
    }

    #[test]
    fn test_extract_outline_empty_stream() {
        let outline =
            extract_outline(Vec::<Result<LayoutPage>>::new(), None, &OutlineOptions::default())
                .unwrap();
        assert_eq!(outline, Outline::new());
    }

    #[test]
    fn test_extract_from_json_malformed() {
        let result = extract_from_json("{not json", &OutlineOptions::default());
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_extract_from_json_with_languages() {
        let mut doc = LayoutDocument::new();
        doc.add_page(report_page());
        let json = serde_json::to_string(&doc).unwrap();

        let options = OutlineOptions::new().with_languages(true);
        let outline = extract_from_json(&json, &options).unwrap();
        let languages = outline.languages.unwrap();
        assert_eq!(languages.primary_language, Language::English);
    }

    #[test]
    fn test_extract_from_json_tolerates_missing_font_data() {
        let json = r#"{"pages": [{"containers": [{"lines": [
            {"text": "Annual Report 2024", "y0": 700.0,
             "chars": [{"size": 24.0}, {"font_name": "Helvetica-Bold", "size": null}]}
        ]}]}]}"#;
        let outline = extract_from_json(json, &OutlineOptions::default()).unwrap();
        assert_eq!(outline.title, "Annual Report 2024");
    }

    #[test]
    fn test_outline_file_missing() {
        let result = outline_file("/nonexistent/layout.json", &OutlineOptions::default());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_detect_language_default_english() {
        let profile = detect_language("Plain English text.");
        assert_eq!(profile.primary, Language::English);
        assert!(!profile.is_multilingual);
    }
}
