//! Per-line heading classification.

use super::lexicon::VocabularyMatcher;
use super::options::OutlineOptions;
use crate::language::Language;
use crate::model::{char_len, LayoutChar};

/// Font-name fragments indicating a bold-like weight.
///
/// Medium weights count as bold.
pub const BOLD_MARKERS: &[&str] = &["bold", "heavy", "black", "semibold", "demi", "medium"];

/// Check if a font name indicates a bold-like weight (case-insensitive).
pub fn is_bold_font(font_name: &str) -> bool {
    if font_name.is_empty() {
        return false;
    }
    let lowered = font_name.to_lowercase();
    BOLD_MARKERS.iter().any(|m| lowered.contains(m))
}

/// Fraction of characters set in a bold-like font; 0 without characters.
pub fn bold_ratio(chars: &[LayoutChar]) -> f32 {
    if chars.is_empty() {
        return 0.0;
    }
    let bold = chars.iter().filter(|c| is_bold_font(&c.font_name)).count();
    bold as f32 / chars.len() as f32
}

/// Check if text has cased letters and all of them are uppercase.
pub fn is_all_caps(text: &str) -> bool {
    let mut has_upper = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

/// The signal that made a line heading-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingSignal {
    /// Enough glyphs in a bold-like font
    Bold,
    /// Absolute font size at or above the large-font threshold
    LargeFont,
    /// Font size well above the running average
    RelativeSize,
    /// Upper-case text longer than three characters
    AllCaps,
    /// Body-sized vocabulary headword
    Vocabulary,
}

/// Decides whether a line looks like a heading.
#[derive(Debug, Clone)]
pub struct HeadingClassifier {
    bold_threshold: f32,
    large_font_size: f32,
    relative_size_ratio: f32,
    vocabulary_min_size: f32,
    vocabulary_max_len: usize,
    vocabulary: VocabularyMatcher,
}

impl HeadingClassifier {
    /// Create a classifier with the built-in German vocabulary lexicon.
    pub fn new(options: &OutlineOptions) -> Self {
        Self::with_vocabulary(options, VocabularyMatcher::german())
    }

    /// Create a classifier with a custom vocabulary matcher.
    pub fn with_vocabulary(options: &OutlineOptions, vocabulary: VocabularyMatcher) -> Self {
        Self {
            bold_threshold: options.bold_threshold,
            large_font_size: options.large_font_size,
            relative_size_ratio: options.relative_size_ratio,
            vocabulary_min_size: options.vocabulary_min_size,
            vocabulary_max_len: options.vocabulary_max_len,
            vocabulary,
        }
    }

    /// Check if a line is heading-like.
    pub fn is_heading(
        &self,
        text: &str,
        bold_ratio: f32,
        font_size: f32,
        avg_font_size: f32,
        primary: Language,
    ) -> bool {
        self.classify(text, bold_ratio, font_size, avg_font_size, primary)
            .is_some()
    }

    /// Return the first signal that marks the line as a heading.
    pub fn classify(
        &self,
        text: &str,
        bold_ratio: f32,
        font_size: f32,
        avg_font_size: f32,
        primary: Language,
    ) -> Option<HeadingSignal> {
        let len = char_len(text);

        if bold_ratio >= self.bold_threshold {
            Some(HeadingSignal::Bold)
        } else if font_size >= self.large_font_size {
            Some(HeadingSignal::LargeFont)
        } else if font_size > avg_font_size * self.relative_size_ratio {
            Some(HeadingSignal::RelativeSize)
        } else if len > 3 && is_all_caps(text) {
            Some(HeadingSignal::AllCaps)
        } else if len < self.vocabulary_max_len
            && font_size >= self.vocabulary_min_size
            && self.vocabulary.matches(text, primary)
        {
            Some(HeadingSignal::Vocabulary)
        } else {
            None
        }
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new(&OutlineOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> HeadingClassifier {
        HeadingClassifier::default()
    }

    #[test]
    fn test_bold_font_detection() {
        assert!(is_bold_font("ABCDEF+Helvetica-Bold"));
        assert!(is_bold_font("Roboto-Medium"));
        assert!(is_bold_font("Arial-BLACK"));
        assert!(!is_bold_font("Helvetica-Oblique"));
        assert!(!is_bold_font(""));
    }

    #[test]
    fn test_bold_ratio() {
        let chars = vec![
            LayoutChar::new("Arial-Bold", 12.0),
            LayoutChar::new("Arial-Bold", 12.0),
            LayoutChar::new("Arial", 12.0),
            LayoutChar::new("Arial", 12.0),
        ];
        assert_eq!(bold_ratio(&chars), 0.5);
        assert_eq!(bold_ratio(&[]), 0.0);
    }

    #[test]
    fn test_all_caps() {
        assert!(is_all_caps("INTRODUCTION 1"));
        assert!(!is_all_caps("Introduction"));
        assert!(!is_all_caps("1234"));
    }

    #[test]
    fn test_bold_signal() {
        let signal = classifier().classify("Overview", 0.5, 11.0, 11.0, Language::English);
        assert_eq!(signal, Some(HeadingSignal::Bold));
        assert!(!classifier().is_heading("Overview", 0.49, 11.0, 11.0, Language::English));
    }

    #[test]
    fn test_size_signals() {
        let c = classifier();
        assert_eq!(
            c.classify("Overview", 0.0, 15.0, 15.0, Language::English),
            Some(HeadingSignal::LargeFont)
        );
        assert_eq!(
            c.classify("Overview", 0.0, 13.1, 10.0, Language::English),
            Some(HeadingSignal::RelativeSize)
        );
        assert_eq!(c.classify("Overview", 0.0, 12.9, 10.0, Language::English), None);
    }

    #[test]
    fn test_all_caps_signal_requires_length() {
        let c = classifier();
        assert_eq!(
            c.classify("SCOPE", 0.0, 11.0, 11.0, Language::English),
            Some(HeadingSignal::AllCaps)
        );
        assert_eq!(c.classify("FAQ", 0.0, 11.0, 11.0, Language::English), None);
    }

    #[test]
    fn test_vocabulary_signal() {
        let c = classifier();
        assert_eq!(
            c.classify("stricken (v)", 0.0, 12.5, 12.5, Language::German),
            Some(HeadingSignal::Vocabulary)
        );
        // Below the vocabulary size floor
        assert_eq!(c.classify("stricken (v)", 0.0, 11.5, 11.5, Language::German), None);
    }

    #[test]
    fn test_body_text_rejected() {
        let c = classifier();
        assert!(!c.is_heading(
            "The quick brown fox jumps over the lazy dog.",
            0.0,
            11.0,
            11.0,
            Language::English
        ));
    }
}
