use margin_types::AnchorResolution;
use serde::{Deserialize, Serialize};

/// Counts of resolution outcomes for a set of comments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSummary {
    /// Located with unchanged content.
    pub current: usize,
    /// Located, but the anchored line's content changed.
    pub outdated: usize,
    /// No longer present on their side of the diff.
    pub orphaned: usize,
}

impl ResolutionSummary {
    pub fn from_resolutions<'a>(
        resolutions: impl IntoIterator<Item = &'a AnchorResolution>,
    ) -> Self {
        resolutions
            .into_iter()
            .fold(Self::default(), |mut summary, resolution| {
                match resolution {
                    AnchorResolution::Located { is_outdated: false, .. } => summary.current += 1,
                    AnchorResolution::Located { is_outdated: true, .. } => summary.outdated += 1,
                    AnchorResolution::Orphaned => summary.orphaned += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.current + self.outdated + self.orphaned
    }

    /// Comments a reviewer should look at again.
    pub fn stale(&self) -> usize {
        self.outdated + self.orphaned
    }
}
