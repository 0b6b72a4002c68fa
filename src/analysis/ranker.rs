//! Font-size ranking and level assignment.

use std::cmp::Ordering;

use crate::model::{HeadingCandidate, HeadingLevel, LineRecord};

/// Heading lines with their level, plus the sizes that defined the levels.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedHeadings {
    /// Distinct heading sizes, largest first
    pub heading_sizes: Vec<f32>,
    /// Retained lines in reading order
    pub candidates: Vec<HeadingCandidate>,
}

impl RankedHeadings {
    /// Level for a font size, if it is one of the heading sizes.
    pub fn level_for(&self, font_size: f32) -> Option<HeadingLevel> {
        self.heading_sizes
            .iter()
            .position(|&s| s == font_size)
            .map(HeadingLevel::from_rank)
    }

    /// Mean font size of the retained lines.
    pub fn average_font_size(&self) -> f32 {
        if self.candidates.is_empty() {
            return 12.0;
        }
        let sum: f64 = self
            .candidates
            .iter()
            .map(|c| f64::from(c.line.font_size))
            .sum();
        (sum / self.candidates.len() as f64) as f32
    }
}

/// Derive heading sizes and assign levels.
///
/// The `max_sizes` largest distinct positive sizes are kept; lines in any
/// other size are dropped. The four largest sizes map to H1-H4 and the
/// remaining kept sizes all map to H4. Returns `None` when no line has a
/// usable size.
pub fn rank_by_font_size(lines: Vec<LineRecord>, max_sizes: usize) -> Option<RankedHeadings> {
    let mut sizes: Vec<f32> = lines
        .iter()
        .map(|l| l.font_size)
        .filter(|&s| s > 0.0)
        .collect();
    if sizes.is_empty() {
        return None;
    }
    sizes.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    sizes.dedup();
    sizes.truncate(max_sizes);

    let candidates: Vec<HeadingCandidate> = lines
        .into_iter()
        .filter_map(|line| {
            let rank = sizes.iter().position(|&s| s == line.font_size)?;
            Some(HeadingCandidate {
                line,
                level: HeadingLevel::from_rank(rank),
            })
        })
        .collect();
    if candidates.is_empty() {
        return None;
    }

    log::debug!(
        "Ranked {} heading lines across sizes {:?}",
        candidates.len(),
        sizes
    );

    Some(RankedHeadings {
        heading_sizes: sizes,
        candidates,
    })
}
