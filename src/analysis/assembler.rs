//! Final outline assembly.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::classifier::{is_bold_font, HeadingClassifier};
use super::collector::MAX_CANDIDATE_LEN;
use super::filters;
use super::ranker::RankedHeadings;
use crate::language::Language;
use crate::model::{char_len, clean_text, OutlineEntry};

/// Build the ordered heading list from ranked lines.
///
/// Merging can change a line's text, so exclusion filters and the heading
/// classifier run again here, this time against the mean size of all ranked
/// lines. The bold signal at this stage comes from the line's leading font
/// only. The title and repeated texts are skipped.
pub fn assemble_outline(
    ranked: &RankedHeadings,
    title: &str,
    classifier: &HeadingClassifier,
    primary: Language,
) -> Vec<OutlineEntry> {
    let avg_font_size = ranked.average_font_size();
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries: Vec<(OutlineEntry, f32)> = Vec::new();

    for candidate in &ranked.candidates {
        let line = &candidate.line;
        let text = clean_text(&line.raw_text);
        if text.is_empty() || text == title || seen.contains(&text) {
            continue;
        }
        if filters::is_excluded(&text) {
            continue;
        }

        let bold_ratio = if is_bold_font(&line.font_name) {
            1.0
        } else {
            0.0
        };
        if !classifier.is_heading(&text, bold_ratio, line.font_size, avg_font_size, primary) {
            continue;
        }
        if char_len(&text) > MAX_CANDIDATE_LEN {
            continue;
        }

        seen.insert(text.clone());
        entries.push((
            OutlineEntry {
                level: candidate.level,
                text,
                page: line.page_index,
            },
            line.baseline_y,
        ));
    }

    entries.sort_by(|(a, ay), (b, by)| {
        a.page
            .cmp(&b.page)
            .then_with(|| by.partial_cmp(ay).unwrap_or(Ordering::Equal))
    });

    log::debug!("Assembled outline with {} headings", entries.len());
    entries.into_iter().map(|(entry, _)| entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingCandidate, HeadingLevel, LineRecord};

    fn candidate(
        text: &str,
        font: &str,
        size: f32,
        page: usize,
        y: f32,
        level: HeadingLevel,
    ) -> HeadingCandidate {
        HeadingCandidate {
            line: LineRecord::new(text, size, font, 1.0, page, y),
            level,
        }
    }

    fn ranked(candidates: Vec<HeadingCandidate>) -> RankedHeadings {
        RankedHeadings {
            heading_sizes: vec![],
            candidates,
        }
    }

    #[test]
    fn test_skips_title_and_duplicates() {
        let ranked = ranked(vec![
            candidate("Annual Report", "Arial-Bold", 24.0, 0, 700.0, HeadingLevel::H1),
            candidate("Overview", "Arial-Bold", 16.0, 0, 600.0, HeadingLevel::H2),
            candidate("Overview", "Arial-Bold", 16.0, 2, 600.0, HeadingLevel::H2),
        ]);
        let outline = assemble_outline(
            &ranked,
            "Annual Report",
            &HeadingClassifier::default(),
            Language::English,
        );
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].text, "Overview");
        assert_eq!(outline[0].page, 0);
    }

    #[test]
    fn test_reapplies_exclusions() {
        let ranked = ranked(vec![
            candidate("Name Age", "Arial-Bold", 16.0, 0, 700.0, HeadingLevel::H1),
            candidate("12/05/2024", "Arial-Bold", 16.0, 0, 650.0, HeadingLevel::H1),
            candidate("Goals", "Arial-Bold", 16.0, 0, 600.0, HeadingLevel::H1),
        ]);
        let outline =
            assemble_outline(&ranked, "", &HeadingClassifier::default(), Language::English);
        let texts: Vec<&str> = outline.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Goals"]);
    }

    #[test]
    fn test_final_gate_uses_document_average() {
        // Regular-weight line whose size no longer stands out
        let ranked = ranked(vec![
            candidate("Background", "Arial", 12.0, 0, 700.0, HeadingLevel::H2),
            candidate("Milestones", "Arial", 12.0, 0, 650.0, HeadingLevel::H2),
        ]);
        let outline =
            assemble_outline(&ranked, "", &HeadingClassifier::default(), Language::English);
        assert!(outline.is_empty());
    }

    #[test]
    fn test_drops_overlong_merged_text() {
        let long = "A heading that grew far too long after merging several fragments";
        let ranked = ranked(vec![candidate(
            long,
            "Arial-Bold",
            16.0,
            0,
            700.0,
            HeadingLevel::H1,
        )]);
        let outline =
            assemble_outline(&ranked, "", &HeadingClassifier::default(), Language::English);
        assert!(outline.is_empty());
    }

    #[test]
    fn test_reading_order() {
        let ranked = ranked(vec![
            candidate("Second Page", "Arial-Bold", 16.0, 1, 700.0, HeadingLevel::H1),
            candidate("Lower Heading", "Arial-Bold", 14.0, 0, 300.0, HeadingLevel::H2),
            candidate("Upper Heading", "Arial-Bold", 14.0, 0, 700.0, HeadingLevel::H2),
        ]);
        let outline =
            assemble_outline(&ranked, "", &HeadingClassifier::default(), Language::English);
        let texts: Vec<&str> = outline.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Upper Heading", "Lower Heading", "Second Page"]);
    }
}
