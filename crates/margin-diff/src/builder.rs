//! Unified-document builder: line-by-line comparison of two revisions.
//!
//! Uses the `similar` crate (Myers by default) and emits every line of both
//! revisions, deleted lines included, as one ordered sequence. Each line
//! carries its number in every revision it belongs to, which is what lets a
//! single anchoring mechanism address any line regardless of side.

use margin_types::{DiffAlgorithm, DiffLine, LineKind};
use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};
use tracing::debug;

/// Both revisions of a file merged into one addressable sequence.
///
/// Document position `i` (1-based) is `lines[i - 1]`. A document is rebuilt
/// from scratch whenever either revision changes and is never patched in
/// place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedDocument {
    /// Every line's content joined with `\n`, in document order.
    pub content: String,
    /// The classified lines.
    pub lines: Vec<DiffLine>,
}

impl UnifiedDocument {
    /// Number of document lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at a 1-based document position.
    pub fn line(&self, doc_line: usize) -> Option<&DiffLine> {
        doc_line.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    /// Returns `true` if any line was added or deleted.
    pub fn has_changes(&self) -> bool {
        self.lines.iter().any(DiffLine::is_change)
    }

    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.count(LineKind::Added)
    }

    /// Number of deleted lines.
    pub fn deletions(&self) -> usize {
        self.count(LineKind::Deleted)
    }

    fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }
}

/// Build the unified document for `original` → `modified` using Myers diff.
pub fn build_unified_document(original: &str, modified: &str) -> UnifiedDocument {
    build_unified_document_with(original, modified, DiffAlgorithm::Myers)
}

/// Build the unified document with an explicit diff algorithm.
///
/// No diff deadline is set, so the result is a pure function of the inputs.
pub fn build_unified_document_with(
    original: &str,
    modified: &str,
    algorithm: DiffAlgorithm,
) -> UnifiedDocument {
    let text_diff = TextDiff::configure()
        .algorithm(match algorithm {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
        })
        .diff_lines(original, modified);

    let mut lines = Vec::new();
    let mut content = String::new();
    let mut original_line = 1usize;
    let mut modified_line = 1usize;

    for change in text_diff.iter_all_changes() {
        // One change is one line; drop the newline that terminates it.
        let text = change.value();
        let text = text.strip_suffix('\n').unwrap_or(text);

        let line = match change.tag() {
            ChangeTag::Equal => {
                let line = DiffLine::unchanged(text, original_line, modified_line);
                original_line += 1;
                modified_line += 1;
                line
            }
            ChangeTag::Delete => {
                let line = DiffLine::deleted(text, original_line);
                original_line += 1;
                line
            }
            ChangeTag::Insert => {
                let line = DiffLine::added(text, modified_line);
                modified_line += 1;
                line
            }
        };

        if !lines.is_empty() {
            content.push('\n');
        }
        content.push_str(&line.content);
        lines.push(line);
    }

    let document = UnifiedDocument { content, lines };
    debug!(
        %algorithm,
        lines = document.len(),
        additions = document.additions(),
        deletions = document.deletions(),
        "unified document built"
    );
    document
}
