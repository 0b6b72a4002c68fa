//! Document title synthesis.
//!
//! Titles are taken from the most prominent heading lines on the first
//! pages. Proposal-style documents often split their title over several
//! lines of the same size, so several fragments may be combined.

use std::cmp::Ordering;

use super::filters::{self, NON_TITLE_WORDS, TRIVIAL_WORDS};
use super::sanity::{longest_run, TextSanity};
use crate::model::{char_len, clean_text, HeadingCandidate};

/// Words that mark a fragment as part of a title regardless of its length.
pub const TITLE_INDICATORS: &[&str] = &[
    "rfp",
    "request",
    "proposal",
    "developing",
    "business plan",
    "present a proposal",
];

/// Keywords scored against the combined fragments of a multi-line title.
pub const TITLE_KEYWORDS: &[&str] = &[
    "rfp",
    "request",
    "proposal",
    "developing",
    "business",
    "plan",
    "ontario",
    "library",
];

/// Keyword hits needed to accept combined fragments as the title.
const MIN_KEYWORD_HITS: usize = 3;

/// Corruption indicators at which combined fragments are rejected.
const MAX_CORRUPTION_INDICATORS: usize = 2;

/// Fragments joined into a combined title.
const MAX_JOINED_FRAGMENTS: usize = 3;

/// Resolves a single title from ranked heading lines.
pub struct TitleResolver<'a> {
    sanity: &'a dyn TextSanity,
    page_limit: usize,
    candidate_limit: usize,
}

impl<'a> TitleResolver<'a> {
    /// Create a resolver looking at pages `0..=page_limit`.
    pub fn new(sanity: &'a dyn TextSanity, page_limit: usize, candidate_limit: usize) -> Self {
        Self {
            sanity,
            page_limit,
            candidate_limit,
        }
    }

    /// Pick the title; empty only when there are no candidates at all.
    pub fn resolve(&self, candidates: &[HeadingCandidate]) -> String {
        let first_pages: Vec<&HeadingCandidate> = candidates
            .iter()
            .filter(|c| c.line.page_index <= self.page_limit)
            .collect();

        let Some(first) = first_pages.first() else {
            return candidates
                .first()
                .map(|c| clean_text(&c.line.raw_text))
                .unwrap_or_default();
        };

        let fragments = self.title_fragments(&first_pages);
        let title = if fragments.len() >= 2 {
            self.combine_fragments(&fragments)
        } else {
            self.single_line_title(&first_pages)
        };

        match title {
            Some(title) if !title.is_empty() => title.trim().to_string(),
            _ => clean_text(&first.line.raw_text),
        }
    }

    /// Clean fragments among the most prominent lines, biggest first.
    fn title_fragments(&self, first_pages: &[&HeadingCandidate]) -> Vec<String> {
        let mut ordered = first_pages.to_vec();
        ordered.sort_by(|a, b| {
            a.line
                .page_index
                .cmp(&b.line.page_index)
                .then_with(|| cmp_desc(a.line.font_size, b.line.font_size))
                .then_with(|| cmp_desc(a.line.baseline_y, b.line.baseline_y))
        });

        ordered
            .iter()
            .take(self.candidate_limit)
            .map(|c| clean_text(&c.line.raw_text))
            .filter(|text| self.is_clean(text))
            .filter(|text| {
                let lowered = text.to_lowercase();
                let len = char_len(text);
                let has_indicator = TITLE_INDICATORS.iter().any(|i| lowered.contains(i));
                (has_indicator || len > 15)
                    && len > 5
                    && len < 120
                    && !filters::is_numeric_noise(text)
                    && !filters::is_numeric_date(text)
                    && !filters::is_one_of(text, NON_TITLE_WORDS)
            })
            .collect()
    }

    /// Combine fragments of a multi-line title, or pick the best one.
    fn combine_fragments(&self, fragments: &[String]) -> Option<String> {
        let combined = fragments.join(" ").to_lowercase();
        let keyword_hits = TITLE_KEYWORDS
            .iter()
            .filter(|k| combined.contains(*k))
            .count();
        let indicators = self.sanity.corruption_indicators(&combined);
        log::debug!(
            "Title fragments: {}, keyword hits: {}, corruption indicators: {}",
            fragments.len(),
            keyword_hits,
            indicators
        );

        if keyword_hits >= MIN_KEYWORD_HITS && indicators < MAX_CORRUPTION_INDICATORS {
            let parts: Vec<&str> = fragments
                .iter()
                .take(MAX_JOINED_FRAGMENTS)
                .map(String::as_str)
                .filter(|p| char_len(p.trim()) > 5)
                .collect();
            if parts.is_empty() {
                return fragments.first().cloned();
            }
            return Some(parts.join(" "));
        }

        let multi_word = fragments
            .iter()
            .filter(|f| longest_run(f) < 4 && f.split_whitespace().count() > 1);
        longest_first(multi_word).or_else(|| fragments.first().cloned())
    }

    /// Most prominent clean line on the first page.
    fn single_line_title(&self, first_pages: &[&HeadingCandidate]) -> Option<String> {
        let mut first_page: Vec<&HeadingCandidate> = first_pages
            .iter()
            .copied()
            .filter(|c| c.line.page_index == 0)
            .collect();
        first_page.sort_by(|a, b| {
            cmp_desc(a.line.font_size, b.line.font_size)
                .then_with(|| cmp_desc(a.line.baseline_y, b.line.baseline_y))
        });

        first_page
            .iter()
            .map(|c| clean_text(&c.line.raw_text))
            .find(|text| {
                let len = char_len(text);
                self.is_clean(text)
                    && len > 8
                    && len < 80
                    && !filters::is_numeric_noise(text)
                    && !filters::is_numeric_date(text)
                    && !filters::is_one_of(text, TRIVIAL_WORDS)
            })
    }

    fn is_clean(&self, text: &str) -> bool {
        !self.sanity.is_corrupted(text) && !filters::is_table_header(text)
    }
}

fn cmp_desc(a: f32, b: f32) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Longest string, the earliest one on ties.
fn longest_first<'s>(items: impl Iterator<Item = &'s String>) -> Option<String> {
    let mut best: Option<&String> = None;
    for item in items {
        if best.map_or(true, |b| char_len(item) > char_len(b)) {
            best = Some(item);
        }
    }
    best.cloned()
}
