use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Line-diff algorithm used to build the unified document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    /// Myers' O(ND) difference algorithm.
    #[default]
    Myers,
    /// Patience diff: anchors on unique lines, then falls back to Myers.
    Patience,
}

impl fmt::Display for DiffAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Myers => f.write_str("myers"),
            Self::Patience => f.write_str("patience"),
        }
    }
}

impl FromStr for DiffAlgorithm {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "myers" => Ok(Self::Myers),
            "patience" => Ok(Self::Patience),
            _ => Err(TypeError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_myers() {
        assert_eq!(DiffAlgorithm::default(), DiffAlgorithm::Myers);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "Patience".parse::<DiffAlgorithm>().unwrap(),
            DiffAlgorithm::Patience
        );
        assert_eq!(
            "myers".parse::<DiffAlgorithm>().unwrap(),
            DiffAlgorithm::Myers
        );
        assert_eq!(
            "histogram".parse::<DiffAlgorithm>(),
            Err(TypeError::UnknownAlgorithm("histogram".into()))
        );
    }
}
