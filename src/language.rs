//! Lightweight multi-script language profiling.
//!
//! The profiler counts characters from fixed Unicode blocks (non-Latin
//! scripts) and language-specific diacritic sets (Latin scripts). A language
//! is detected when its share of the text exceeds a per-language threshold.
//! The result only biases heading heuristics; nothing is localized.

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Languages the profiler can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Chinese,
    Japanese,
    Korean,
    Arabic,
    Russian,
    Hindi,
    French,
    Spanish,
    German,
    Portuguese,
    Italian,
}

impl Language {
    /// Lowercase language name.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Chinese => "chinese",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Arabic => "arabic",
            Language::Russian => "russian",
            Language::Hindi => "hindi",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::German => "german",
            Language::Portuguese => "portuguese",
            Language::Italian => "italian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a language's characters are recognized.
#[derive(Debug, Clone, Copy)]
enum Signal {
    /// Inclusive code point ranges of a script block
    Script(&'static [(u32, u32)]),
    /// Lowercase diacritics typical of a Latin-script language
    Diacritics(&'static str),
}

impl Signal {
    fn matches(&self, c: char) -> bool {
        match self {
            Signal::Script(ranges) => {
                let code = c as u32;
                ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&code))
            }
            Signal::Diacritics(set) => set.contains(c),
        }
    }

    fn is_diacritic(&self) -> bool {
        matches!(self, Signal::Diacritics(_))
    }
}

/// Detection rule: signal plus minimum share of the text.
struct LanguageRule {
    language: Language,
    signal: Signal,
    /// Minimum fraction of characters (0.0-1.0)
    threshold: f64,
}

/// Rules in evaluation order; ties in confidence keep this order.
///
/// Diacritic thresholds are much lower than script thresholds because an
/// accented letter is rare per character even in native text.
static RULES: &[LanguageRule] = &[
    LanguageRule {
        language: Language::Chinese,
        signal: Signal::Script(&[(0x4E00, 0x9FFF)]),
        threshold: 0.10,
    },
    LanguageRule {
        language: Language::Japanese,
        signal: Signal::Script(&[(0x3040, 0x309F), (0x30A0, 0x30FF)]),
        threshold: 0.05,
    },
    LanguageRule {
        language: Language::Korean,
        signal: Signal::Script(&[(0xAC00, 0xD7AF)]),
        threshold: 0.10,
    },
    LanguageRule {
        language: Language::Arabic,
        signal: Signal::Script(&[(0x0600, 0x06FF)]),
        threshold: 0.10,
    },
    LanguageRule {
        language: Language::Russian,
        signal: Signal::Script(&[(0x0400, 0x04FF)]),
        threshold: 0.10,
    },
    LanguageRule {
        language: Language::Hindi,
        signal: Signal::Script(&[(0x0900, 0x097F)]),
        threshold: 0.10,
    },
    LanguageRule {
        language: Language::French,
        signal: Signal::Diacritics("àâäéèêëïîôöùûüÿñç"),
        threshold: 0.005,
    },
    LanguageRule {
        language: Language::Spanish,
        signal: Signal::Diacritics("áéíóúüñ¿¡"),
        threshold: 0.005,
    },
    LanguageRule {
        language: Language::German,
        signal: Signal::Diacritics("äöüß"),
        threshold: 0.003,
    },
    LanguageRule {
        language: Language::Portuguese,
        signal: Signal::Diacritics("ãõáéíóúàâêôç"),
        threshold: 0.005,
    },
    LanguageRule {
        language: Language::Italian,
        signal: Signal::Diacritics("àèéìíîòóù"),
        threshold: 0.005,
    },
];

/// Confidence (percent) above which a non-English language marks the text
/// as multilingual.
const MULTILINGUAL_MIN_CONFIDENCE: f64 = 0.3;

/// Confidence (percent) counted toward the "several strong languages" test.
const STRONG_LANGUAGE_CONFIDENCE: f64 = 3.0;

/// Result of profiling a document's text.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    /// Most confident language
    pub primary: Language,
    /// Detected languages with confidence in percent, most confident first
    pub ranked: Vec<(Language, f64)>,
    /// Coarse bilingual/multilingual signal
    pub is_multilingual: bool,
}

impl LanguageProfile {
    /// Profile for text with no usable signal.
    pub fn english() -> Self {
        Self {
            primary: Language::English,
            ranked: vec![(Language::English, 100.0)],
            is_multilingual: false,
        }
    }

    /// Profile a document's full text.
    pub fn detect(text: &str) -> Self {
        let ranked = detect_languages(text);
        let is_multilingual = multilingual(&ranked);
        let primary = ranked
            .first()
            .map(|&(language, _)| language)
            .unwrap_or(Language::English);
        Self {
            primary,
            ranked,
            is_multilingual,
        }
    }

    /// Profile optional text; absent text yields the English default.
    pub fn detect_optional(text: Option<&str>) -> Self {
        match text {
            Some(text) if !text.is_empty() => Self::detect(text),
            _ => Self::english(),
        }
    }

    /// Confidence for a language, if it was detected.
    pub fn confidence(&self, language: Language) -> Option<f64> {
        self.ranked
            .iter()
            .find(|(l, _)| *l == language)
            .map(|&(_, c)| c)
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::english()
    }
}

/// Score every language against the text, most confident first.
///
/// Always returns at least one entry; English at 100% when nothing clears
/// its threshold.
pub fn detect_languages(text: &str) -> Vec<(Language, f64)> {
    if text.is_empty() {
        return vec![(Language::English, 100.0)];
    }

    let text: String = text.nfc().collect();
    let total = text.chars().count();
    let lowered = text.to_lowercase();

    let mut ranked: Vec<(Language, f64)> = RULES
        .iter()
        .filter_map(|rule| {
            let source = if rule.signal.is_diacritic() {
                &lowered
            } else {
                &text
            };
            let count = source.chars().filter(|&c| rule.signal.matches(c)).count();
            if count as f64 > total as f64 * rule.threshold {
                Some((rule.language, round2(count as f64 / total as f64 * 100.0)))
            } else {
                None
            }
        })
        .collect();

    if ranked.is_empty() {
        ranked.push((Language::English, 100.0));
    }

    // Stable sort keeps rule order among equal confidences
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

fn multilingual(ranked: &[(Language, f64)]) -> bool {
    let non_english = ranked
        .iter()
        .any(|&(l, c)| l != Language::English && c > MULTILINGUAL_MIN_CONFIDENCE);
    let strong = ranked
        .iter()
        .filter(|&&(_, c)| c > STRONG_LANGUAGE_CONFIDENCE)
        .count();
    non_english || strong > 1
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_english() {
        let profile = LanguageProfile::detect("");
        assert_eq!(profile.primary, Language::English);
        assert_eq!(profile.ranked, vec![(Language::English, 100.0)]);
        assert!(!profile.is_multilingual);
    }

    #[test]
    fn test_plain_english() {
        let profile =
            LanguageProfile::detect("This is a sample English text with no special characters.");
        assert_eq!(profile.primary, Language::English);
        assert!(!profile.is_multilingual);
    }

    #[test]
    fn test_chinese_primary() {
        let profile = LanguageProfile::detect("你好！你好吗？这非常有趣。谢谢你的帮助。");
        assert_eq!(profile.primary, Language::Chinese);
        assert!(profile.is_multilingual);
    }

    #[test]
    fn test_mostly_latin_with_some_chinese() {
        // 5 of 30 characters are ideographs: ~16.7%
        let text = "abcdefghijklmnopqrstuvwxy你好你好你";
        let profile = LanguageProfile::detect(text);
        assert_eq!(profile.primary, Language::Chinese);
    }

    #[test]
    fn test_russian() {
        let profile = LanguageProfile::detect("Привет! Как дела? Это очень интересно.");
        assert_eq!(profile.primary, Language::Russian);
    }

    #[test]
    fn test_german_diacritics() {
        let profile = LanguageProfile::detect(
            "Guten Tag! Wie geht es Ihnen? Das ist sehr schön. Vielen Dank für Ihre Hilfe.",
        );
        assert!(profile.confidence(Language::German).is_some());
        assert!(profile.is_multilingual);
    }

    #[test]
    fn test_decomposed_accents_count() {
        // "schön" with a combining diaeresis
        let decomposed = "Das ist scho\u{0308}n und gru\u{0308}n";
        let profile = LanguageProfile::detect(decomposed);
        assert!(profile.confidence(Language::German).is_some());
    }

    #[test]
    fn test_ranked_descending() {
        let profile = LanguageProfile::detect("Olá! Como você está? Muito obrigado pela sua cooperação.");
        let confidences: Vec<f64> = profile.ranked.iter().map(|&(_, c)| c).collect();
        let mut sorted = confidences.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(confidences, sorted);
        assert_eq!(profile.primary, profile.ranked[0].0);
    }

    #[test]
    fn test_detect_optional_none() {
        assert_eq!(LanguageProfile::detect_optional(None), LanguageProfile::english());
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::German.to_string(), "german");
    }
}
