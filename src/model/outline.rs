//! Outline result types.

use serde::{Deserialize, Serialize};

use super::HeadingLevel;
use crate::language::{Language, LanguageProfile};

/// A single heading in the outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level (H1-H4)
    pub level: HeadingLevel,

    /// Heading text
    pub text: String,

    /// Zero-based page index
    pub page: usize,
}

/// Inferred document structure: a title plus leveled headings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Document title (empty if none could be inferred)
    pub title: String,

    /// Headings in reading order
    pub outline: Vec<OutlineEntry>,

    /// Language profile summary, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<LanguageSummary>,
}

impl Outline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.outline.len()
    }

    /// Check if the outline has no title and no headings.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.outline.is_empty()
    }
}

/// A detected language with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    /// Language name
    pub language: Language,

    /// Share of matching characters, in percent
    pub confidence: f64,
}

/// Serializable summary of a [`LanguageProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSummary {
    /// Highest-confidence language
    pub primary_language: Language,

    /// Up to three detected languages, most confident first
    pub detected_languages: Vec<DetectedLanguage>,

    /// Whether the text mixes languages
    pub is_multilingual: bool,
}

impl From<&LanguageProfile> for LanguageSummary {
    fn from(profile: &LanguageProfile) -> Self {
        Self {
            primary_language: profile.primary,
            detected_languages: profile
                .ranked
                .iter()
                .take(3)
                .map(|&(language, confidence)| DetectedLanguage {
                    language,
                    confidence,
                })
                .collect(),
            is_multilingual: profile.is_multilingual,
        }
    }
}
