//! Per-line records flowing through the heading pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length of a string in characters.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// One physical text line with its dominant typography.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    /// Text as emitted by the parser, trailing whitespace removed
    pub raw_text: String,
    /// Whitespace-normalized text
    pub cleaned_text: String,
    /// Largest glyph size on the line
    pub font_size: f32,
    /// Font of the first glyph on the line
    pub font_name: String,
    /// Fraction of glyphs set in a bold-like weight
    pub bold_ratio: f32,
    /// Zero-based page index
    pub page_index: usize,
    /// Vertical position (larger is higher on the page)
    pub baseline_y: f32,
}

impl LineRecord {
    /// Create a record; `cleaned_text` is derived from `raw_text`.
    pub fn new(
        raw_text: &str,
        font_size: f32,
        font_name: impl Into<String>,
        bold_ratio: f32,
        page_index: usize,
        baseline_y: f32,
    ) -> Self {
        let raw_text = raw_text.trim_end().to_string();
        let cleaned_text = clean_text(&raw_text);
        Self {
            raw_text,
            cleaned_text,
            font_size,
            font_name: font_name.into(),
            bold_ratio,
            page_index,
            baseline_y,
        }
    }

    /// Absorb a following fragment of the same visual line group.
    ///
    /// Text is joined with one space and the lower of the two positions is
    /// kept.
    pub fn absorb(&mut self, next: &LineRecord) {
        let joined = format!(
            "{} {}",
            self.raw_text.trim_end(),
            next.raw_text.trim_start()
        );
        self.cleaned_text = clean_text(&joined);
        self.raw_text = joined;
        self.baseline_y = self.baseline_y.min(next.baseline_y);
    }
}

/// Outline heading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// Level for a rank among the heading sizes (0 = largest).
    ///
    /// Ranks past the fourth collapse into `H4`.
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            0 => HeadingLevel::H1,
            1 => HeadingLevel::H2,
            2 => HeadingLevel::H3,
            _ => HeadingLevel::H4,
        }
    }

    /// Numeric depth (1-4).
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.depth())
    }
}

/// A line record judged heading-like, with its assigned level.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingCandidate {
    /// The underlying (possibly merged) line
    pub line: LineRecord,
    /// Level derived from the line's font size
    pub level: HeadingLevel,
}
