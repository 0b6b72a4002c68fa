//! Text sanity checks for font-substitution artifacts.
//!
//! Some PDFs substitute fonts in a way that makes the layout parser emit
//! garbage such as long runs of one glyph, letter-spaced text or strings
//! dominated by `f`. Title resolution consults a [`TextSanity`]
//! implementation so the heuristics can be tuned or replaced.

/// Predicate deciding whether extracted text looks corrupted.
pub trait TextSanity: Send + Sync {
    /// Check a single title fragment.
    fn is_corrupted(&self, text: &str) -> bool;

    /// Count corruption indicators in lowercased, space-joined fragments.
    fn corruption_indicators(&self, combined: &str) -> usize;
}

/// Default checks tuned for font-substitution artifacts.
#[derive(Debug, Clone)]
pub struct FontArtifactSanity {
    /// Runs of this many identical characters mark a fragment corrupted
    pub max_repeat_run: usize,
    /// Minimum share of non-space characters
    pub min_dense_ratio: f64,
    /// Maximum share of the glyph `f`
    pub max_f_ratio: f64,
    /// Substrings left behind by broken glyph mappings
    pub artifact_substrings: &'static [&'static str],
    /// Maximum share of the combined text any one character may take
    pub max_char_share: f64,
}

impl Default for FontArtifactSanity {
    fn default() -> Self {
        Self {
            max_repeat_run: 5,
            min_dense_ratio: 0.3,
            max_f_ratio: 0.3,
            artifact_substrings: &["oposal", "quest f", "eeee"],
            max_char_share: 0.15,
        }
    }
}

impl TextSanity for FontArtifactSanity {
    fn is_corrupted(&self, text: &str) -> bool {
        let len = text.chars().count() as f64;
        let dense = text.chars().filter(|&c| c != ' ').count() as f64;
        let fs = text.chars().filter(|&c| c == 'f').count() as f64;

        longest_run(text) >= self.max_repeat_run
            || dense < len * self.min_dense_ratio
            || fs > len * self.max_f_ratio
    }

    fn corruption_indicators(&self, combined: &str) -> usize {
        let mut indicators = self
            .artifact_substrings
            .iter()
            .filter(|s| combined.contains(*s))
            .count();

        // Counted per position, so one dominant character already exceeds 2
        let len = combined.chars().count() as f64;
        let dominant_positions = combined
            .chars()
            .filter(|&c| {
                combined.chars().filter(|&o| o == c).count() as f64 > len * self.max_char_share
            })
            .count();
        if dominant_positions > 2 {
            indicators += 1;
        }
        indicators
    }
}

/// Length of the longest run of one repeated character.
pub fn longest_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev = None;
    for c in text.chars() {
        if Some(c) == prev {
            current += 1;
        } else {
            current = 1;
            prev = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}
