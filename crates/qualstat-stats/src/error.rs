use serde::{Deserialize, Serialize};

/// Category of a [`StatsError`], stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The input had no valid numeric entries after filtering.
    #[display("input_empty")]
    InputEmpty,
    /// A minimum count required by the whole computation was not met.
    #[display("insufficient_data")]
    InsufficientData,
    /// No usable binning could be derived from the sample.
    #[display("invalid_class_configuration")]
    InvalidClassConfiguration,
    /// The control chart factor table has no entry for the subgroup size.
    #[display("unsupported_subgroup_size")]
    UnsupportedSubgroupSize,
    /// Subgroups do not all share the declared measurement count.
    #[display("subgroup_size_mismatch")]
    SubgroupSizeMismatch,
}

/// Errors returned by the computation engine.
///
/// Every variant is recoverable and deterministic: the same input always
/// produces the same error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum StatsError {
    #[display("no valid numeric values found in the {input}")]
    InputEmpty { input: &'static str },
    #[display("insufficient data: {reason}")]
    InsufficientData { reason: &'static str },
    #[display("cannot build a usable class configuration: {reason}")]
    InvalidClassConfiguration { reason: String },
    #[display("no control chart factors for subgroup size {size} (supported sizes are 2 to 20)")]
    UnsupportedSubgroupSize { size: usize },
    /// `sample` is the 1-based position of the offending subgroup.
    #[display("sample {sample} has {actual} valid measurements, expected {expected}")]
    SubgroupSizeMismatch {
        sample: usize,
        expected: usize,
        actual: usize,
    },
}

impl StatsError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputEmpty { .. } => ErrorKind::InputEmpty,
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::InvalidClassConfiguration { .. } => ErrorKind::InvalidClassConfiguration,
            Self::UnsupportedSubgroupSize { .. } => ErrorKind::UnsupportedSubgroupSize,
            Self::SubgroupSizeMismatch { .. } => ErrorKind::SubgroupSizeMismatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let err = StatsError::UnsupportedSubgroupSize { size: 25 };
        assert_eq!(err.kind(), ErrorKind::UnsupportedSubgroupSize);
        assert!(err.is_unsupported_subgroup_size());
        assert_eq!(
            err.to_string(),
            "no control chart factors for subgroup size 25 (supported sizes are 2 to 20)"
        );
    }

    #[test]
    fn test_mismatch_message() {
        let err = StatsError::SubgroupSizeMismatch {
            sample: 3,
            expected: 4,
            actual: 2,
        };
        assert_eq!(err.to_string(), "sample 3 has 2 valid measurements, expected 4");
        assert_eq!(err.kind().to_string(), "subgroup_size_mismatch");
    }
}
