//! Line record collection from the layout stream.

use super::classifier::{bold_ratio, HeadingClassifier};
use super::filters;
use crate::language::Language;
use crate::model::{char_len, clean_text, LayoutLine, LayoutPage, LineRecord};

/// Shortest line (in characters) eligible as a heading candidate.
pub const MIN_CANDIDATE_LEN: usize = 3;

/// Longest line (in characters) eligible as a heading candidate.
pub const MAX_CANDIDATE_LEN: usize = 60;

/// Consumes pages one at a time and keeps the heading-like lines.
///
/// Each line is classified against the average size of all lines seen so
/// far, including itself. Early large lines therefore stand out before the
/// average settles.
pub struct LineRecordCollector<'a> {
    classifier: &'a HeadingClassifier,
    primary: Language,
    size_sum: f64,
    size_count: usize,
    candidates: Vec<LineRecord>,
}

impl<'a> LineRecordCollector<'a> {
    /// Create a collector for one document.
    pub fn new(classifier: &'a HeadingClassifier, primary: Language) -> Self {
        Self {
            classifier,
            primary,
            size_sum: 0.0,
            size_count: 0,
            candidates: Vec::new(),
        }
    }

    /// Process every line of a page.
    pub fn push_page(&mut self, page_index: usize, page: &LayoutPage) {
        for line in page.lines() {
            self.push_line(page_index, line);
        }
    }

    /// Process a single line.
    pub fn push_line(&mut self, page_index: usize, line: &LayoutLine) {
        let cleaned = clean_text(&line.text);
        let len = char_len(&cleaned);
        if !(MIN_CANDIDATE_LEN..=MAX_CANDIDATE_LEN).contains(&len) {
            return;
        }
        let Some(first) = line.chars.first() else {
            return;
        };

        let font_size = line
            .chars
            .iter()
            .map(|c| c.effective_size())
            .fold(0.0_f32, f32::max);

        self.size_sum += f64::from(font_size);
        self.size_count += 1;
        let avg_font_size = self.average_font_size();

        let bold = bold_ratio(&line.chars);
        if !self
            .classifier
            .is_heading(&cleaned, bold, font_size, avg_font_size, self.primary)
        {
            return;
        }
        if filters::is_excluded(&cleaned) {
            return;
        }

        self.candidates.push(LineRecord::new(
            &line.text,
            font_size,
            first.font_name.clone(),
            bold,
            page_index,
            line.y0,
        ));
    }

    /// Average font size of every eligible line seen so far.
    pub fn average_font_size(&self) -> f32 {
        if self.size_count == 0 {
            return 12.0;
        }
        (self.size_sum / self.size_count as f64) as f32
    }

    /// Number of heading-like lines collected so far.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Finish collection and return the heading-like lines.
    pub fn finish(self) -> Vec<LineRecord> {
        self.candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LayoutChar;

    fn page(lines: Vec<LayoutLine>) -> LayoutPage {
        let mut page = LayoutPage::new();
        for line in lines {
            page.add_line(line);
        }
        page
    }

    #[test]
    fn test_prefix_average_promotes_early_large_line() {
        let classifier = HeadingClassifier::default();
        let mut collector = LineRecordCollector::new(&classifier, Language::English);
        collector.push_page(
            0,
            &page(vec![
                LayoutLine::uniform("Annual Report 2024", 700.0, "Helvetica-Bold", 24.0),
                LayoutLine::uniform("Body text line one", 650.0, "Helvetica", 11.0),
                LayoutLine::uniform("Body text line two", 630.0, "Helvetica", 11.0),
            ]),
        );

        let candidates = collector.finish();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].cleaned_text, "Annual Report 2024");
        assert_eq!(candidates[0].font_size, 24.0);
        assert_eq!(candidates[0].bold_ratio, 1.0);
    }

    #[test]
    fn test_length_bounds() {
        let classifier = HeadingClassifier::default();
        let mut collector = LineRecordCollector::new(&classifier, Language::English);
        collector.push_line(0, &LayoutLine::uniform("AB", 700.0, "Arial-Bold", 20.0));
        collector.push_line(0, &LayoutLine::uniform("A".repeat(61), 680.0, "Arial-Bold", 20.0));
        collector.push_line(0, &LayoutLine::uniform("  ", 660.0, "Arial-Bold", 20.0));
        assert_eq!(collector.candidate_count(), 0);
        // Rejected lines do not feed the average
        assert_eq!(collector.average_font_size(), 12.0);
    }

    #[test]
    fn test_line_without_chars_skipped() {
        let classifier = HeadingClassifier::default();
        let mut collector = LineRecordCollector::new(&classifier, Language::English);
        collector.push_line(0, &LayoutLine::with_chars("INTRODUCTION", 700.0, vec![]));
        assert_eq!(collector.candidate_count(), 0);
    }

    #[test]
    fn test_font_size_is_max_and_name_is_first() {
        let classifier = HeadingClassifier::default();
        let mut collector = LineRecordCollector::new(&classifier, Language::English);
        let chars = vec![
            LayoutChar::new("Times-Bold", 16.0),
            LayoutChar::new("Times-Roman", 18.0),
            LayoutChar::new("Times-Roman", 9.0),
        ];
        collector.push_line(1, &LayoutLine::with_chars("Methods\n", 500.0, chars));

        let candidates = collector.finish();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].font_size, 18.0);
        assert_eq!(candidates[0].font_name, "Times-Bold");
        assert_eq!(candidates[0].page_index, 1);
        assert_eq!(candidates[0].raw_text, "Methods");
    }

    #[test]
    fn test_exclusions_applied() {
        let classifier = HeadingClassifier::default();
        let mut collector = LineRecordCollector::new(&classifier, Language::English);
        for text in ["12/05/2024", "March 21, 2003", "7.", "Signature", "S.No Name Age"] {
            collector.push_line(0, &LayoutLine::uniform(text, 700.0, "Arial-Bold", 14.0));
        }
        assert_eq!(collector.candidate_count(), 0);
    }
}
