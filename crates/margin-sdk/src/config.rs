use margin_crypto::HashAlgorithm;
use margin_types::DiffAlgorithm;
use serde::{Deserialize, Serialize};

use crate::error::SdkResult;

/// Configuration for building review documents.
///
/// Every field has a default, so a partial TOML table is enough:
///
/// ```toml
/// context_lines = 5
/// hash_algorithm = "blake3"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Unchanged lines shown around each change. `0` or less shows the whole
    /// file without collapsing.
    pub context_lines: i64,
    /// Digest algorithm for newly created anchors.
    pub hash_algorithm: HashAlgorithm,
    /// Line-diff algorithm.
    pub diff_algorithm: DiffAlgorithm,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            context_lines: 3,
            hash_algorithm: HashAlgorithm::Rolling,
            diff_algorithm: DiffAlgorithm::Myers,
        }
    }
}

impl ReviewConfig {
    /// Show every line, never collapse.
    pub fn full_file() -> Self {
        Self {
            context_lines: 0,
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(s: &str) -> SdkResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Context line count for the hunk calculator, negative values clamped to 0.
    pub fn effective_context_lines(&self) -> usize {
        usize::try_from(self.context_lines.max(0)).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;

    #[test]
    fn default_config() {
        let c = ReviewConfig::default();
        assert_eq!(c.context_lines, 3);
        assert_eq!(c.hash_algorithm, HashAlgorithm::Rolling);
        assert_eq!(c.diff_algorithm, DiffAlgorithm::Myers);
        assert_eq!(c.effective_context_lines(), 3);
    }

    #[test]
    fn full_file_disables_context() {
        assert_eq!(ReviewConfig::full_file().effective_context_lines(), 0);
    }

    #[test]
    fn negative_context_is_clamped() {
        let c = ReviewConfig {
            context_lines: -4,
            ..Default::default()
        };
        assert_eq!(c.effective_context_lines(), 0);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let text = "context_lines = 5\nhash_algorithm = \"blake3\"\n";
        let c = ReviewConfig::from_toml_str(text).unwrap();
        assert_eq!(c.context_lines, 5);
        assert_eq!(c.hash_algorithm, HashAlgorithm::Blake3);
        assert_eq!(c.diff_algorithm, DiffAlgorithm::Myers);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            ReviewConfig::from_toml_str("").unwrap(),
            ReviewConfig::default()
        );
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let err = ReviewConfig::from_toml_str("diff_algorithm = \"histogram\"").unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn toml_roundtrip() {
        let c = ReviewConfig {
            context_lines: 8,
            hash_algorithm: HashAlgorithm::Blake3,
            diff_algorithm: DiffAlgorithm::Patience,
        };
        let text = toml::to_string(&c).unwrap();
        assert_eq!(ReviewConfig::from_toml_str(&text).unwrap(), c);
    }
}
