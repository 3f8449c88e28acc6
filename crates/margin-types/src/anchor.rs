use serde::{Deserialize, Serialize};

use crate::line::Side;

/// Persisted identity of the line a review comment is attached to.
///
/// An anchor is created once, when the comment is written, and stored by the
/// caller exactly as produced. It identifies the line by side and line number
/// and keeps a snapshot of the line's text plus a digest of that text, so a
/// later resolution can tell whether the line was edited in the meantime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAnchor {
    /// Revision the line number refers to.
    pub side: Side,
    /// 1-based line number on `side`.
    pub line: usize,
    /// Line text at the time the anchor was created.
    pub anchor_content: String,
    /// Digest of `anchor_content`.
    pub anchor_hash: String,
}

impl CommentAnchor {
    pub fn new(
        side: Side,
        line: usize,
        anchor_content: impl Into<String>,
        anchor_hash: impl Into<String>,
    ) -> Self {
        Self {
            side,
            line,
            anchor_content: anchor_content.into(),
            anchor_hash: anchor_hash.into(),
        }
    }
}

/// Where a [`CommentAnchor`] landed in the current unified document.
///
/// Derived on every render, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AnchorResolution {
    /// The anchored line exists at `doc_line` (1-based). `is_outdated` is set
    /// when its text no longer matches the snapshot taken at creation.
    #[serde(rename_all = "camelCase")]
    Located {
        doc_line: usize,
        is_outdated: bool,
    },
    /// No line on the anchor's side carries the anchor's line number.
    Orphaned,
}

impl AnchorResolution {
    pub const fn located(doc_line: usize, is_outdated: bool) -> Self {
        Self::Located {
            doc_line,
            is_outdated,
        }
    }

    /// The current document position, unless orphaned.
    pub fn doc_line(&self) -> Option<usize> {
        match self {
            Self::Located { doc_line, .. } => Some(*doc_line),
            Self::Orphaned => None,
        }
    }

    pub fn is_orphaned(&self) -> bool {
        matches!(self, Self::Orphaned)
    }

    pub fn is_outdated(&self) -> bool {
        matches!(self, Self::Located { is_outdated: true, .. })
    }

    /// Located with unchanged content.
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Located { is_outdated: false, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_serializes_with_persisted_field_names() {
        let anchor = CommentAnchor::new(Side::Original, 2, "line 2", "0a1b2c3d");
        let json = serde_json::to_value(&anchor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "side": "original",
                "line": 2,
                "anchorContent": "line 2",
                "anchorHash": "0a1b2c3d",
            })
        );
    }

    #[test]
    fn anchor_serde_roundtrip() {
        let anchor = CommentAnchor::new(Side::Modified, 14, "fn main() {", "deadbeef");
        let json = serde_json::to_string(&anchor).unwrap();
        let parsed: CommentAnchor = serde_json::from_str(&json).unwrap();
        assert_eq!(anchor, parsed);
    }

    #[test]
    fn unknown_side_is_rejected_on_load() {
        let json = r#"{"side":"left","line":1,"anchorContent":"","anchorHash":""}"#;
        assert!(serde_json::from_str::<CommentAnchor>(json).is_err());
    }

    #[test]
    fn resolution_accessors() {
        let located = AnchorResolution::located(5, false);
        assert_eq!(located.doc_line(), Some(5));
        assert!(located.is_current());
        assert!(!located.is_outdated());

        let outdated = AnchorResolution::located(3, true);
        assert!(outdated.is_outdated());
        assert!(!outdated.is_current());

        assert_eq!(AnchorResolution::Orphaned.doc_line(), None);
        assert!(AnchorResolution::Orphaned.is_orphaned());
        assert!(!AnchorResolution::Orphaned.is_outdated());
    }

    #[test]
    fn resolution_serializes_tagged() {
        let json = serde_json::to_value(AnchorResolution::located(4, true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "located", "docLine": 4, "isOutdated": true})
        );
        let orphaned = serde_json::to_value(AnchorResolution::Orphaned).unwrap();
        assert_eq!(orphaned, serde_json::json!({"status": "orphaned"}));
    }
}
