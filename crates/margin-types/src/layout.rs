use std::fmt;

use serde::{Deserialize, Serialize};

/// A contiguous document range covering one cluster of changes plus
/// surrounding context.
///
/// Document lines are 1-based and inclusive. The side ranges follow unified
/// diff conventions: a hunk with no line from one side reports `0` for both
/// that side's start and count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hunk {
    pub start_doc_line: usize,
    pub end_doc_line: usize,
    /// First original line number covered by the hunk.
    pub original_start: usize,
    /// Number of original lines covered by the hunk.
    pub original_count: usize,
    /// First modified line number covered by the hunk.
    pub modified_start: usize,
    /// Number of modified lines covered by the hunk.
    pub modified_count: usize,
}

impl Hunk {
    /// Number of document lines in the hunk.
    pub fn len(&self) -> usize {
        inclusive_span(self.start_doc_line, self.end_doc_line)
    }

    pub fn is_empty(&self) -> bool {
        self.end_doc_line < self.start_doc_line
    }

    pub fn contains(&self, doc_line: usize) -> bool {
        (self.start_doc_line..=self.end_doc_line).contains(&doc_line)
    }
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@@ -{},{} +{},{} @@",
            self.original_start, self.original_count, self.modified_start, self.modified_count
        )
    }
}

/// A run of unchanged lines hidden by default.
///
/// Whether a region is currently expanded is session state held by the
/// caller, keyed by `start_doc_line`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollapsedRegion {
    pub start_doc_line: usize,
    pub end_doc_line: usize,
    pub line_count: usize,
}

impl CollapsedRegion {
    /// Region covering 1-based document lines `start..=end`.
    pub fn new(start_doc_line: usize, end_doc_line: usize) -> Self {
        Self {
            start_doc_line,
            end_doc_line,
            line_count: inclusive_span(start_doc_line, end_doc_line),
        }
    }

    pub fn contains(&self, doc_line: usize) -> bool {
        (self.start_doc_line..=self.end_doc_line).contains(&doc_line)
    }
}

/// Number of lines in `start..=end`; `0` when the range is inverted.
fn inclusive_span(start: usize, end: usize) -> usize {
    if end < start {
        0
    } else {
        (end - start).saturating_add(1)
    }
}
