//! Evaluator configuration.

use crate::error::{PartitionError, Result};

/// Largest feature count whose signature radix `10^i` still fits in `u64`.
pub const MAX_FEATURE_COUNT: usize = 19;

/// How records sharing a signature are kept together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GroupingPolicy {
    /// First record seen with a signature fixes the group for all of them.
    /// One bucketed gene per record.
    #[default]
    Hard,

    /// Indicator matrix used as decoded; violations are penalized.
    /// One gene per (record, group).
    Soft,
}

/// Configuration for [`super::PartitionEvaluator`].
///
/// # Examples
///
/// ```
/// use u_cohort::evaluator::{GroupingPolicy, PartitionConfig};
///
/// let config = PartitionConfig::new(6, 5) // 6 groups, 5 maskable attributes
///     .with_minimum_group_size(50)
///     .with_policy(GroupingPolicy::Hard);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionConfig {
    /// Number of groups in a partition.
    pub group_count: usize,

    /// Number of maskable categorical attributes (leading mask genes).
    pub feature_count: usize,

    /// Groups with fewer members are penalized. 0 disables the penalty.
    ///
    /// Only honoured by [`GroupingPolicy::Hard`].
    pub minimum_group_size: usize,

    pub policy: GroupingPolicy,
}

impl PartitionConfig {
    /// Creates a hard-unification configuration without a minimum group size.
    pub fn new(group_count: usize, feature_count: usize) -> Self {
        Self {
            group_count,
            feature_count,
            minimum_group_size: 0,
            policy: GroupingPolicy::Hard,
        }
    }

    pub fn with_minimum_group_size(mut self, n: usize) -> Self {
        self.minimum_group_size = n;
        self
    }

    pub fn with_policy(mut self, policy: GroupingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.group_count == 0 {
            return Err(PartitionError::InvalidConfig(
                "group_count must be at least 1".into(),
            ));
        }
        if self.feature_count == 0 {
            return Err(PartitionError::InvalidConfig(
                "feature_count must be at least 1".into(),
            ));
        }
        if self.feature_count > MAX_FEATURE_COUNT {
            return Err(PartitionError::InvalidConfig(format!(
                "feature_count ({}) exceeds the signature limit of {}",
                self.feature_count, MAX_FEATURE_COUNT
            )));
        }
        Ok(())
    }
}
