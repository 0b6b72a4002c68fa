//! Heading analysis pipeline.
//!
//! Data flows strictly forward through the stages:
//!
//! 1. [`LanguageProfile`] is computed once from the full document text.
//! 2. [`LineRecordCollector`] consumes pages and keeps heading-like lines.
//! 3. [`merge_fragments`] joins multi-line headings.
//! 4. [`rank_by_font_size`] keeps the heading sizes and assigns levels.
//! 5. [`TitleResolver`] picks the title from the first pages.
//! 6. [`assemble_outline`] produces the final ordered heading list.
//!
//! Each extraction owns all of its state, so independent documents can be
//! processed in parallel with separate calls.

mod assembler;
mod classifier;
mod collector;
pub mod filters;
mod lexicon;
mod merger;
mod options;
mod ranker;
mod sanity;
mod title;

pub use assembler::assemble_outline;
pub use classifier::{bold_ratio, is_all_caps, is_bold_font, HeadingClassifier, HeadingSignal};
pub use collector::{LineRecordCollector, MAX_CANDIDATE_LEN, MIN_CANDIDATE_LEN};
pub use lexicon::{VocabularyLexicon, VocabularyMatcher, GERMAN_LEXICON};
pub use merger::{merge_fragments, sort_reading_order};
pub use options::OutlineOptions;
pub use ranker::{rank_by_font_size, RankedHeadings};
pub use sanity::{longest_run, FontArtifactSanity, TextSanity};
pub use title::{TitleResolver, TITLE_INDICATORS, TITLE_KEYWORDS};

use std::borrow::{Borrow, Cow};

use crate::error::Result;
use crate::language::LanguageProfile;
use crate::model::{LayoutDocument, LayoutPage, Outline};

/// Runs the full outline pipeline for one document at a time.
///
/// # Example
///
/// ```
/// use pdfoutline::{LayoutDocument, LayoutLine, LayoutPage, OutlineExtractor};
///
/// let mut page = LayoutPage::new();
/// page.add_line(LayoutLine::uniform("Annual Report 2024", 700.0, "Helvetica-Bold", 24.0));
/// page.add_line(LayoutLine::uniform("Revenue grew in every region.", 650.0, "Helvetica", 11.0));
/// let mut doc = LayoutDocument::new();
/// doc.add_page(page);
///
/// let outline = OutlineExtractor::new().extract_document(&doc)?;
/// assert_eq!(outline.title, "Annual Report 2024");
/// assert!(outline.outline.is_empty());
/// # Ok::<(), pdfoutline::Error>(())
/// ```
pub struct OutlineExtractor {
    options: OutlineOptions,
    classifier: HeadingClassifier,
    sanity: Box<dyn TextSanity>,
}

impl OutlineExtractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::with_options(OutlineOptions::default())
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: OutlineOptions) -> Self {
        let classifier = HeadingClassifier::new(&options);
        Self {
            options,
            classifier,
            sanity: Box::new(FontArtifactSanity::default()),
        }
    }

    /// Replace the vocabulary matcher used for body-sized headwords.
    pub fn with_vocabulary(mut self, vocabulary: VocabularyMatcher) -> Self {
        self.classifier = HeadingClassifier::with_vocabulary(&self.options, vocabulary);
        self
    }

    /// Replace the text sanity checks used during title resolution.
    pub fn with_sanity(mut self, sanity: impl TextSanity + 'static) -> Self {
        self.sanity = Box::new(sanity);
        self
    }

    /// Get the extraction options.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Extract an outline from a page stream.
    ///
    /// Pages are consumed one at a time. An `Err` page is a failure of the
    /// external layout parser and aborts this document. Without `full_text`
    /// the language profile defaults to English.
    pub fn extract<I, P>(&self, pages: I, full_text: Option<&str>) -> Result<Outline>
    where
        I: IntoIterator<Item = Result<P>>,
        P: Borrow<LayoutPage>,
    {
        let profile = LanguageProfile::detect_optional(full_text);
        log::debug!(
            "Primary language: {} (multilingual: {})",
            profile.primary,
            profile.is_multilingual
        );

        let mut collector = LineRecordCollector::new(&self.classifier, profile.primary);
        for (page_index, page) in pages.into_iter().enumerate() {
            let page = page?;
            collector.push_page(page_index, page.borrow());
        }
        let candidates = collector.finish();
        log::debug!("Collected {} heading candidates", candidates.len());

        let merged = merge_fragments(candidates, self.options.merge_distance);

        let mut outline = Outline::new();
        if self.options.include_languages {
            outline.languages = Some((&profile).into());
        }

        let Some(ranked) = rank_by_font_size(merged, self.options.max_heading_sizes) else {
            log::debug!("No heading-eligible font sizes found");
            return Ok(outline);
        };

        let resolver = TitleResolver::new(
            &*self.sanity,
            self.options.title_page_limit,
            self.options.title_candidate_limit,
        );
        outline.title = resolver.resolve(&ranked.candidates);
        outline.outline =
            assemble_outline(&ranked, &outline.title, &self.classifier, profile.primary);

        Ok(outline)
    }

    /// Extract an outline from a fully loaded layout document.
    ///
    /// When the document carries no separately extracted full text, the
    /// joined line text is profiled instead.
    pub fn extract_document(&self, doc: &LayoutDocument) -> Result<Outline> {
        let full_text: Cow<'_, str> = match doc.full_text.as_deref() {
            Some(text) => Cow::Borrowed(text),
            None => {
                log::warn!("No full text available, profiling language from layout lines");
                Cow::Owned(doc.plain_text())
            }
        };

        self.extract(doc.pages.iter().map(Ok), Some(&*full_text))
    }
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new()
    }
}
