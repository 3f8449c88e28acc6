//! Diff engine for Margin.
//!
//! Builds the unified document for a pair of revisions and windows it into
//! hunks with collapsible unchanged context.
//!
//! # Key Types
//!
//! - [`UnifiedDocument`] -- Every line of both revisions in one addressable sequence
//! - [`HunkLayout`] -- Hunks plus the collapsed regions between them

pub mod builder;
pub mod hunks;

pub use builder::{build_unified_document, build_unified_document_with, UnifiedDocument};
pub use hunks::{calculate_hunks, hidden_positions, visible_lines, HunkLayout};
