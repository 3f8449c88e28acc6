//! High-level SDK for Margin.
//!
//! Wires the diff builder, hunk calculator, and anchor resolver together for
//! a review UI. This is the main entry point for applications embedding
//! Margin: build a [`ReviewDocument`] whenever either revision changes, then
//! resolve the live comments against it and apply the auto-expand policy.

pub mod config;
pub mod error;
pub mod review;

pub use config::ReviewConfig;
pub use error::{SdkError, SdkResult};
pub use review::{pinned_lines, LiveComment, ResolvedComment, ReviewDocument};

// Re-export key types
pub use margin_anchor::{AnchorResolver, ResolutionSummary};
pub use margin_crypto::HashAlgorithm;
pub use margin_diff::{HunkLayout, UnifiedDocument};
pub use margin_types::{
    AnchorResolution, CollapsedRegion, CommentAnchor, DiffAlgorithm, DiffLine, Hunk, LineKind,
    LineNumbers, Side,
};
