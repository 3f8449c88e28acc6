//! Anchor creation and resolution.
//!
//! Anchors identify a line by side and line number. Resolution is exact: the
//! anchor lands on the line that carries the same number on the same side in
//! the new document, or is orphaned if no line does. Content drift at that
//! position is reported through the outdated flag.

use std::collections::HashMap;

use margin_crypto::{ContentHasher, HashAlgorithm};
use margin_types::{AnchorResolution, CommentAnchor, DiffLine, LineNumbers, Side};
use tracing::debug;

/// Creates anchors and resolves them against unified documents.
///
/// The resolver holds no state besides the digest algorithm used for new
/// anchors and can be shared freely between threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnchorResolver {
    hasher: ContentHasher,
}

impl AnchorResolver {
    pub const fn new(hasher: ContentHasher) -> Self {
        Self { hasher }
    }

    pub const fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self::new(ContentHasher::new(algorithm))
    }

    pub fn hasher(&self) -> ContentHasher {
        self.hasher
    }

    /// Anchor a comment to the line at 1-based `doc_line`.
    ///
    /// Returns `None` when `doc_line` is outside the document.
    pub fn create_anchor(&self, doc_line: usize, lines: &[DiffLine]) -> Option<CommentAnchor> {
        let line = doc_line.checked_sub(1).and_then(|i| lines.get(i))?;
        let side = line.anchor_side();
        let number = line.line_on(side)?;
        Some(CommentAnchor::new(
            side,
            number,
            line.content.clone(),
            self.hasher.digest(&line.content),
        ))
    }

    /// Locate an anchor in `lines`.
    pub fn resolve_anchor(&self, anchor: &CommentAnchor, lines: &[DiffLine]) -> AnchorResolution {
        let position = lines
            .iter()
            .position(|l| l.line_on(anchor.side) == Some(anchor.line));
        self.resolution_at(anchor, lines, position)
    }

    /// Resolve many anchors against the same document.
    ///
    /// Builds a [`LineIndex`] once instead of scanning the document per anchor.
    /// Results are returned in the order of `anchors`.
    pub fn resolve_all(
        &self,
        anchors: &[CommentAnchor],
        lines: &[DiffLine],
    ) -> Vec<AnchorResolution> {
        let index = LineIndex::new(lines);
        anchors
            .iter()
            .map(|anchor| {
                let position = index.position(anchor.side, anchor.line);
                self.resolution_at(anchor, lines, position)
            })
            .collect()
    }

    fn resolution_at(
        &self,
        anchor: &CommentAnchor,
        lines: &[DiffLine],
        position: Option<usize>,
    ) -> AnchorResolution {
        let Some(i) = position else {
            debug!(side = %anchor.side, line = anchor.line, "anchor orphaned");
            return AnchorResolution::Orphaned;
        };
        let is_outdated = !self.hasher.matches(&lines[i].content, &anchor.anchor_hash);
        if is_outdated {
            debug!(side = %anchor.side, line = anchor.line, doc_line = i + 1, "anchor outdated");
        }
        AnchorResolution::Located {
            doc_line: i + 1,
            is_outdated,
        }
    }
}

/// Lookup table from `(side, line number)` to 0-based document position.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    positions: HashMap<(Side, usize), usize>,
}

impl LineIndex {
    pub fn new(lines: &[DiffLine]) -> Self {
        let mut positions = HashMap::with_capacity(lines.len() * 2);
        for (i, line) in lines.iter().enumerate() {
            for side in [Side::Original, Side::Modified] {
                if let Some(number) = line.line_on(side) {
                    positions.entry((side, number)).or_insert(i);
                }
            }
        }
        Self { positions }
    }

    /// First 0-based position whose `side` line number equals `line`.
    pub fn position(&self, side: Side, line: usize) -> Option<usize> {
        self.positions.get(&(side, line)).copied()
    }
}

/// [`AnchorResolver::create_anchor`] with the default (rolling) digest.
pub fn create_anchor(doc_line: usize, lines: &[DiffLine]) -> Option<CommentAnchor> {
    AnchorResolver::default().create_anchor(doc_line, lines)
}

/// [`AnchorResolver::resolve_anchor`] with the default resolver.
pub fn resolve_anchor(anchor: &CommentAnchor, lines: &[DiffLine]) -> AnchorResolution {
    AnchorResolver::default().resolve_anchor(anchor, lines)
}

/// Line numbers and kind of the line at 1-based `doc_line`.
pub fn line_numbers(doc_line: usize, lines: &[DiffLine]) -> Option<LineNumbers> {
    doc_line
        .checked_sub(1)
        .and_then(|i| lines.get(i))
        .map(LineNumbers::from)
}
