//! Outline extraction options and thresholds.

/// Options controlling heading classification, merging, ranking and
/// title resolution.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Minimum fraction of bold glyphs for a line to count as bold
    pub bold_threshold: f32,

    /// Absolute font size (pt) at which a line is always heading-like
    pub large_font_size: f32,

    /// Ratio over the average font size at which a line is heading-like
    pub relative_size_ratio: f32,

    /// Minimum font size (pt) for the vocabulary-heading rule
    pub vocabulary_min_size: f32,

    /// Maximum text length (exclusive) for the vocabulary-heading rule
    pub vocabulary_max_len: usize,

    /// Maximum vertical distance between merged heading fragments
    pub merge_distance: f32,

    /// Number of distinct font sizes kept as heading sizes
    pub max_heading_sizes: usize,

    /// Last page index (inclusive) inspected for the title
    pub title_page_limit: usize,

    /// Number of top-ranked lines inspected as title fragments
    pub title_candidate_limit: usize,

    /// Whether to attach the language profile summary to the outline
    pub include_languages: bool,
}

impl OutlineOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bold ratio threshold.
    pub fn with_bold_threshold(mut self, threshold: f32) -> Self {
        self.bold_threshold = threshold;
        self
    }

    /// Set the absolute large-font threshold.
    pub fn with_large_font_size(mut self, size: f32) -> Self {
        self.large_font_size = size;
        self
    }

    /// Set the relative size ratio.
    pub fn with_relative_size_ratio(mut self, ratio: f32) -> Self {
        self.relative_size_ratio = ratio;
        self
    }

    /// Set the minimum font size for vocabulary headwords.
    pub fn with_vocabulary_min_size(mut self, size: f32) -> Self {
        self.vocabulary_min_size = size;
        self
    }

    /// Set the length limit (exclusive) for vocabulary headwords.
    pub fn with_vocabulary_max_len(mut self, len: usize) -> Self {
        self.vocabulary_max_len = len;
        self
    }

    /// Set the merge distance for multi-line headings.
    pub fn with_merge_distance(mut self, distance: f32) -> Self {
        self.merge_distance = distance;
        self
    }

    /// Set the number of heading sizes kept.
    pub fn with_max_heading_sizes(mut self, count: usize) -> Self {
        self.max_heading_sizes = count;
        self
    }

    /// Set the last page index inspected for the title.
    pub fn with_title_page_limit(mut self, page: usize) -> Self {
        self.title_page_limit = page;
        self
    }

    /// Set how many top-ranked lines are inspected as title fragments.
    pub fn with_title_candidate_limit(mut self, limit: usize) -> Self {
        self.title_candidate_limit = limit;
        self
    }

    /// Include the language profile summary in the result.
    pub fn with_languages(mut self, include: bool) -> Self {
        self.include_languages = include;
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            bold_threshold: 0.5,
            large_font_size: 15.0,
            relative_size_ratio: 1.3,
            vocabulary_min_size: 12.0,
            vocabulary_max_len: 40,
            merge_distance: 20.0,
            max_heading_sizes: 10,
            title_page_limit: 1,
            title_candidate_limit: 8,
            include_languages: false,
        }
    }
}
