use std::collections::{BTreeSet, HashSet};

use margin_anchor::{line_numbers, AnchorResolver, ResolutionSummary};
use margin_crypto::ContentHasher;
use margin_diff::{
    build_unified_document_with, calculate_hunks, hidden_positions, HunkLayout, UnifiedDocument,
};
use margin_types::{AnchorResolution, CollapsedRegion, CommentAnchor, DiffLine, LineNumbers};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ReviewConfig;

/// A persisted comment as the caller loads it from its store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveComment {
    /// Caller-assigned comment identifier.
    pub id: String,
    pub anchor: CommentAnchor,
}

impl LiveComment {
    pub fn new(id: impl Into<String>, anchor: CommentAnchor) -> Self {
        Self {
            id: id.into(),
            anchor,
        }
    }
}

/// A comment placed on the current document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedComment {
    pub id: String,
    pub resolution: AnchorResolution,
}

/// One computed view of a file under review.
///
/// Holds the unified document and its hunk layout for a single pair of
/// revisions. Build a new one whenever either revision changes; nothing in
/// here is updated incrementally.
#[derive(Clone, Debug)]
pub struct ReviewDocument {
    document: UnifiedDocument,
    layout: HunkLayout,
    context_lines: usize,
    resolver: AnchorResolver,
}

impl ReviewDocument {
    /// Diff `original` against `modified` and window the result.
    pub fn build(original: &str, modified: &str, config: &ReviewConfig) -> Self {
        let document = build_unified_document_with(original, modified, config.diff_algorithm);
        let context_lines = config.effective_context_lines();
        let layout = calculate_hunks(&document.lines, context_lines);
        Self {
            document,
            layout,
            context_lines,
            resolver: AnchorResolver::new(ContentHasher::new(config.hash_algorithm)),
        }
    }

    pub fn document(&self) -> &UnifiedDocument {
        &self.document
    }

    pub fn lines(&self) -> &[DiffLine] {
        &self.document.lines
    }

    pub fn layout(&self) -> &HunkLayout {
        &self.layout
    }

    pub fn context_lines(&self) -> usize {
        self.context_lines
    }

    /// Anchor a new comment at 1-based `doc_line`.
    pub fn create_anchor(&self, doc_line: usize) -> Option<CommentAnchor> {
        self.resolver.create_anchor(doc_line, self.lines())
    }

    pub fn line_numbers(&self, doc_line: usize) -> Option<LineNumbers> {
        line_numbers(doc_line, self.lines())
    }

    /// Place every live comment on this document.
    pub fn resolve_comments(&self, comments: &[LiveComment]) -> Vec<ResolvedComment> {
        let anchors: Vec<CommentAnchor> = comments.iter().map(|c| c.anchor.clone()).collect();
        let resolutions = self.resolver.resolve_all(&anchors, self.lines());
        let summary = ResolutionSummary::from_resolutions(&resolutions);
        debug!(
            current = summary.current,
            outdated = summary.outdated,
            orphaned = summary.orphaned,
            "comments resolved"
        );
        comments
            .iter()
            .zip(resolutions)
            .map(|(comment, resolution)| ResolvedComment {
                id: comment.id.clone(),
                resolution,
            })
            .collect()
    }

    /// Regions to collapse, leaving out any region that contains a pinned line.
    ///
    /// `pinned` holds 1-based document lines that must stay visible: the
    /// lines of located comments and of comment forms still being edited.
    pub fn collapsed_regions(&self, pinned: &[usize]) -> Vec<CollapsedRegion> {
        self.layout.collapsible_regions(pinned)
    }

    /// 0-based positions to display.
    ///
    /// `expanded` holds the start lines of regions the user opened this
    /// session; regions containing a `pinned` line are never hidden.
    pub fn visible_lines(&self, expanded: &HashSet<usize>, pinned: &[usize]) -> BTreeSet<usize> {
        let all: BTreeSet<usize> = (0..self.document.len()).collect();
        if self.context_lines == 0 {
            return all;
        }
        let hidden = hidden_positions(&self.collapsed_regions(pinned), expanded);
        all.difference(&hidden).copied().collect()
    }
}

/// Document lines of the comments that were located.
pub fn pinned_lines(resolved: &[ResolvedComment]) -> Vec<usize> {
    resolved
        .iter()
        .filter_map(|c| c.resolution.doc_line())
        .collect()
}
