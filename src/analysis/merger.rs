//! Merging of multi-line heading fragments.

use std::cmp::Ordering;

use crate::model::LineRecord;

/// Sort records into reading order: page ascending, top of page first.
pub fn sort_reading_order(records: &mut [LineRecord]) {
    records.sort_by(|a, b| {
        a.page_index.cmp(&b.page_index).then_with(|| {
            b.baseline_y
                .partial_cmp(&a.baseline_y)
                .unwrap_or(Ordering::Equal)
        })
    });
}

/// Merge adjacent fragments of the same visual heading.
///
/// Records are put into reading order first. A record is folded into the
/// previously retained one when both sit on the same page, share the exact
/// font size and lie less than `max_distance` apart vertically. The merged
/// record keeps the lower of the two positions.
pub fn merge_fragments(mut records: Vec<LineRecord>, max_distance: f32) -> Vec<LineRecord> {
    sort_reading_order(&mut records);

    let mut merged: Vec<LineRecord> = Vec::with_capacity(records.len());
    for record in records {
        match merged.last_mut() {
            Some(prev)
                if prev.page_index == record.page_index
                    && prev.font_size == record.font_size
                    && (prev.baseline_y - record.baseline_y).abs() < max_distance =>
            {
                prev.absorb(&record);
            }
            _ => merged.push(record),
        }
    }

    log::debug!("Merged heading fragments into {} lines", merged.len());
    merged
}
