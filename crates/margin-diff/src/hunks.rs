//! Hunk windowing over a unified document.
//!
//! Changed lines are grouped into hunks with `context_lines` of surrounding
//! context; everything outside a hunk becomes a collapsed region that the
//! caller can expand per session. A `context_lines` of `0` disables
//! windowing entirely.

use std::collections::{BTreeSet, HashSet};

use margin_types::{CollapsedRegion, DiffLine, Hunk};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hunks and the collapsed regions between them.
///
/// Both lists are ordered by document position and never overlap. Together
/// they cover the whole document, unless windowing is disabled, in which case
/// both are empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HunkLayout {
    pub hunks: Vec<Hunk>,
    pub collapsed_regions: Vec<CollapsedRegion>,
}

impl HunkLayout {
    /// Returns `true` when there is nothing to window ("render everything").
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty() && self.collapsed_regions.is_empty()
    }

    /// The hunk containing a 1-based document line.
    pub fn hunk_at(&self, doc_line: usize) -> Option<&Hunk> {
        self.hunks.iter().find(|h| h.contains(doc_line))
    }

    /// The collapsed region containing a 1-based document line.
    pub fn region_at(&self, doc_line: usize) -> Option<&CollapsedRegion> {
        self.collapsed_regions.iter().find(|r| r.contains(doc_line))
    }

    /// Regions that may be collapsed given a set of pinned document lines.
    ///
    /// A region containing any pinned line (a located comment, an open
    /// comment form) is left out, which keeps it expanded.
    pub fn collapsible_regions(&self, pinned: &[usize]) -> Vec<CollapsedRegion> {
        self.collapsed_regions
            .iter()
            .filter(|r| !pinned.iter().any(|&line| r.contains(line)))
            .copied()
            .collect()
    }

    /// 0-based positions hidden by regions not present in `expanded`.
    pub fn hidden_positions(&self, expanded: &HashSet<usize>) -> BTreeSet<usize> {
        hidden_positions(&self.collapsed_regions, expanded)
    }
}

/// Group changed lines into hunks and compute the collapsed regions.
pub fn calculate_hunks(lines: &[DiffLine], context_lines: usize) -> HunkLayout {
    if context_lines == 0 || lines.is_empty() {
        return HunkLayout::default();
    }

    let changed: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_change())
        .map(|(i, _)| i)
        .collect();

    if changed.is_empty() {
        let collapsed_regions = if lines.len() > context_lines.saturating_mul(2) {
            vec![CollapsedRegion::new(1, lines.len())]
        } else {
            Vec::new()
        };
        return HunkLayout {
            hunks: Vec::new(),
            collapsed_regions,
        };
    }

    // Consecutive changes whose context windows touch or overlap share a hunk.
    let max_gap = context_lines.saturating_mul(2).saturating_add(1);
    let mut clusters: Vec<(usize, usize)> = Vec::new();
    for &pos in &changed {
        match clusters.last_mut() {
            Some((_, end)) if pos - *end <= max_gap => *end = pos,
            _ => clusters.push((pos, pos)),
        }
    }

    let last = lines.len() - 1;
    let hunks: Vec<Hunk> = clusters
        .iter()
        .map(|&(start, end)| {
            let start = start.saturating_sub(context_lines);
            let end = end.saturating_add(context_lines).min(last);
            hunk_for(lines, start, end)
        })
        .collect();

    let mut collapsed_regions = Vec::new();
    let mut next_free = 1usize;
    for hunk in &hunks {
        if hunk.start_doc_line > next_free {
            collapsed_regions.push(CollapsedRegion::new(next_free, hunk.start_doc_line - 1));
        }
        next_free = hunk.end_doc_line + 1;
    }
    if next_free <= lines.len() {
        collapsed_regions.push(CollapsedRegion::new(next_free, lines.len()));
    }

    debug!(
        changed = changed.len(),
        hunks = hunks.len(),
        regions = collapsed_regions.len(),
        context_lines,
        "hunks calculated"
    );

    HunkLayout {
        hunks,
        collapsed_regions,
    }
}

/// 0-based positions to display, given the session's expanded regions.
///
/// `expanded` holds the `start_doc_line` of every region the user opened.
pub fn visible_lines(
    lines: &[DiffLine],
    context_lines: usize,
    expanded: &HashSet<usize>,
) -> BTreeSet<usize> {
    let all: BTreeSet<usize> = (0..lines.len()).collect();
    if context_lines == 0 {
        return all;
    }
    let hidden = calculate_hunks(lines, context_lines).hidden_positions(expanded);
    all.difference(&hidden).copied().collect()
}

/// 0-based positions covered by `regions` whose start line is not in `expanded`.
///
/// Regions with a zero start line are malformed and hide nothing.
pub fn hidden_positions(
    regions: &[CollapsedRegion],
    expanded: &HashSet<usize>,
) -> BTreeSet<usize> {
    regions
        .iter()
        .filter(|r| r.start_doc_line > 0 && !expanded.contains(&r.start_doc_line))
        .flat_map(|r| (r.start_doc_line - 1)..r.end_doc_line)
        .collect()
}

/// Build the hunk spanning 0-based positions `start..=end`.
fn hunk_for(lines: &[DiffLine], start: usize, end: usize) -> Hunk {
    let span = &lines[start..=end];
    let (original_start, original_count) = side_range(span.iter().map(|l| l.original_line));
    let (modified_start, modified_count) = side_range(span.iter().map(|l| l.modified_line));
    Hunk {
        start_doc_line: start + 1,
        end_doc_line: end + 1,
        original_start,
        original_count,
        modified_start,
        modified_count,
    }
}

/// First line number and line count of one side; `(0, 0)` when absent.
fn side_range(numbers: impl Iterator<Item = Option<usize>>) -> (usize, usize) {
    let mut first = None;
    let mut count = 0;
    for n in numbers.flatten() {
        first.get_or_insert(n);
        count += 1;
    }
    (first.unwrap_or(0), count)
}
