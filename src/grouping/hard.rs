//! Hard unification: the first record seen with a signature decides the
//! group for every record sharing it.

use super::types::{GroupingPenalty, GroupingStrategy, Membership, Resolution};
use crate::decoder::bucket_group;
use std::collections::HashMap;

/// Signature → group memo for one evaluation.
///
/// Created empty at the start of every [`HardUnification::resolve`] call.
#[derive(Debug, Default)]
pub struct SignatureMemo {
    groups: HashMap<u64, usize>,
}

impl SignatureMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized group for `signature`, recording `provisional`
    /// if the signature has not been seen yet.
    pub fn assign(&mut self, signature: u64, provisional: usize) -> usize {
        *self.groups.entry(signature).or_insert(provisional)
    }

    /// Number of distinct signatures seen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Policy A: one bucketed gene per record, equal signatures forced together.
///
/// Unification itself never produces a penalty. The minimum-group-size
/// penalty is applied by the scorer.
///
/// # Examples
///
/// ```
/// use u_cohort::grouping::{GroupingStrategy, HardUnification};
///
/// // Records 0 and 2 share signature 7; record 0 is seen first.
/// let resolution = HardUnification.resolve(&[7, 3, 7], &[0.1, 0.6, 0.9], 2);
/// assert_eq!(resolution.final_groups, Some(vec![0, 1, 0]));
/// assert_eq!(resolution.penalty.total(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HardUnification;

impl GroupingStrategy for HardUnification {
    fn name(&self) -> &'static str {
        "hard"
    }

    fn decision_gene_count(&self, record_count: usize, _group_count: usize) -> usize {
        record_count
    }

    fn resolve(&self, signatures: &[u64], genes: &[f64], group_count: usize) -> Resolution {
        let provisional: Vec<usize> = genes
            .iter()
            .map(|&g| bucket_group(g, group_count))
            .collect();

        let mut memo = SignatureMemo::new();
        let final_groups: Vec<usize> = signatures
            .iter()
            .zip(&provisional)
            .map(|(&sig, &group)| memo.assign(sig, group))
            .collect();

        Resolution {
            membership: Membership::from_assignment(&final_groups, group_count),
            provisional_groups: Some(provisional),
            final_groups: Some(final_groups),
            penalty: GroupingPenalty::default(),
        }
    }

    fn enforces_minimum_size(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_first_wins() {
        let mut memo = SignatureMemo::new();
        assert_eq!(memo.assign(42, 3), 3);
        assert_eq!(memo.assign(42, 1), 3);
        assert_eq!(memo.assign(7, 1), 1);
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn test_distinct_signatures_keep_provisional() {
        let r = HardUnification.resolve(&[1, 2, 3, 4], &[0.1, 0.3, 0.6, 0.9], 4);
        assert_eq!(r.provisional_groups, Some(vec![0, 1, 2, 3]));
        assert_eq!(r.final_groups, Some(vec![0, 1, 2, 3]));
        assert_eq!(r.membership.group_sizes(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_collapsed_signatures_follow_first_record() {
        let r = HardUnification.resolve(&[0; 4], &[0.8, 0.1, 0.3, 0.6], 4);
        assert_eq!(r.provisional_groups, Some(vec![3, 0, 1, 2]));
        assert_eq!(r.final_groups, Some(vec![3; 4]));
        assert_eq!(r.membership.group_sizes(), vec![0, 0, 0, 4]);
    }

    #[test]
    fn test_memo_does_not_leak_between_calls() {
        let first = HardUnification.resolve(&[5, 5], &[0.9, 0.1], 2);
        let second = HardUnification.resolve(&[5, 5], &[0.1, 0.9], 2);
        assert_eq!(first.final_groups, Some(vec![1, 1]));
        assert_eq!(second.final_groups, Some(vec![0, 0]));
    }

    #[test]
    fn test_gene_count() {
        assert_eq!(HardUnification.decision_gene_count(10, 4), 10);
        assert!(HardUnification.enforces_minimum_size());
    }
}
