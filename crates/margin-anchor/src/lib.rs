//! Comment anchoring for Margin.
//!
//! A review comment is attached to a line through a [`CommentAnchor`]: the
//! line's side and number plus a digest of its text. Whenever the unified
//! document is rebuilt, the anchor is resolved against the new document and
//! comes back located (possibly outdated) or orphaned.
//!
//! ```rust
//! use margin_anchor::{create_anchor, resolve_anchor};
//! use margin_types::{AnchorResolution, DiffLine};
//!
//! let lines = vec![DiffLine::unchanged("a", 1, 1), DiffLine::added("b", 2)];
//! let anchor = create_anchor(2, &lines).unwrap();
//! assert_eq!(
//!     resolve_anchor(&anchor, &lines),
//!     AnchorResolution::located(2, false)
//! );
//! ```

pub mod resolver;
pub mod summary;

pub use resolver::{create_anchor, line_numbers, resolve_anchor, AnchorResolver, LineIndex};
pub use summary::ResolutionSummary;

pub use margin_types::{AnchorResolution, CommentAnchor, LineNumbers, Side};
