//! Foundation types for Margin, the diff and comment-anchoring engine.
//!
//! Every other Margin crate depends on `margin-types`. The types here are
//! plain data: they carry no behaviour beyond construction, lookup, and
//! formatting, so they can be handed between threads and persisted freely.
//!
//! # Key Types
//!
//! - [`DiffLine`] / [`LineKind`] -- One classified line of the unified document
//! - [`Side`] -- Which revision a line number refers to
//! - [`CommentAnchor`] -- Persisted side + line identity of a review comment
//! - [`AnchorResolution`] -- Where an anchor landed in a freshly built document
//! - [`Hunk`] / [`CollapsedRegion`] -- Display windowing over the document

pub mod algorithm;
pub mod anchor;
pub mod error;
pub mod layout;
pub mod line;

pub use algorithm::DiffAlgorithm;
pub use anchor::{AnchorResolution, CommentAnchor};
pub use error::TypeError;
pub use layout::{CollapsedRegion, Hunk};
pub use line::{DiffLine, LineKind, LineNumbers, Side};
