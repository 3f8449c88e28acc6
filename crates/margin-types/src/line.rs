use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Classification of a line in the unified document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Present in both revisions.
    Unchanged,
    /// Present only in the modified revision.
    Added,
    /// Present only in the original revision.
    Deleted,
}

impl LineKind {
    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Deleted => "deleted",
        }
    }

    /// Returns `true` for added and deleted lines.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unchanged" => Ok(Self::Unchanged),
            "added" => Ok(Self::Added),
            "deleted" => Ok(Self::Deleted),
            other => Err(TypeError::InvalidLineKind(other.to_string())),
        }
    }
}

/// One of the two revisions being compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The older revision (left-hand side).
    Original,
    /// The newer revision (right-hand side).
    Modified,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Modified => "modified",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "modified" => Ok(Self::Modified),
            other => Err(TypeError::InvalidSide(other.to_string())),
        }
    }
}

/// A single line of the unified document.
///
/// Carries the line's text and its number in each revision it belongs to.
/// The constructors uphold the mapping invariant: unchanged lines have both
/// numbers, deleted lines only an original number, added lines only a
/// modified number. Numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    /// Line text without its trailing newline.
    pub content: String,
    /// Classification of the line.
    #[serde(rename = "type")]
    pub kind: LineKind,
    /// Line number in the original revision, if the line exists there.
    pub original_line: Option<usize>,
    /// Line number in the modified revision, if the line exists there.
    pub modified_line: Option<usize>,
}

impl DiffLine {
    /// A line present in both revisions.
    pub fn unchanged(
        content: impl Into<String>,
        original_line: usize,
        modified_line: usize,
    ) -> Self {
        Self {
            content: content.into(),
            kind: LineKind::Unchanged,
            original_line: Some(original_line),
            modified_line: Some(modified_line),
        }
    }

    /// A line that only exists in the modified revision.
    pub fn added(content: impl Into<String>, modified_line: usize) -> Self {
        Self {
            content: content.into(),
            kind: LineKind::Added,
            original_line: None,
            modified_line: Some(modified_line),
        }
    }

    /// A line that only exists in the original revision.
    pub fn deleted(content: impl Into<String>, original_line: usize) -> Self {
        Self {
            content: content.into(),
            kind: LineKind::Deleted,
            original_line: Some(original_line),
            modified_line: None,
        }
    }

    /// The line number on the given side, if the line exists there.
    pub fn line_on(&self, side: Side) -> Option<usize> {
        match side {
            Side::Original => self.original_line,
            Side::Modified => self.modified_line,
        }
    }

    /// The side a comment on this line is anchored to.
    ///
    /// Deleted lines only exist in the original revision; everything else is
    /// addressed through the modified revision.
    pub fn anchor_side(&self) -> Side {
        match self.kind {
            LineKind::Deleted => Side::Original,
            LineKind::Added | LineKind::Unchanged => Side::Modified,
        }
    }

    /// Returns `true` for added and deleted lines.
    pub fn is_change(&self) -> bool {
        self.kind.is_change()
    }
}

/// Line-number lookup result for a single document position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineNumbers {
    pub original: Option<usize>,
    pub modified: Option<usize>,
    pub kind: LineKind,
}

impl From<&DiffLine> for LineNumbers {
    fn from(line: &DiffLine) -> Self {
        Self {
            original: line.original_line,
            modified: line.modified_line,
            kind: line.kind,
        }
    }
}
