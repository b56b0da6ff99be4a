//! Soft penalty: the indicator matrix is used as decoded, and violations of
//! one-group membership or signature consistency are charged to the score.

use super::types::{GroupingPenalty, GroupingStrategy, Membership, Resolution};
use crate::decoder::is_active;
use std::collections::BTreeMap;

/// Charge per extra group a record belongs to, and for a record in no group.
pub const MEMBERSHIP_PENALTY: f64 = 100.0;

/// Scale of the per-signature split penalty.
pub const CONSISTENCY_PENALTY: f64 = 1000.0;

/// Policy B: one gene per (record, group), read as a binary indicator.
///
/// # Examples
///
/// ```
/// use u_cohort::grouping::{GroupingStrategy, SoftPenalty};
///
/// // Two records with the same signature, placed in different groups.
/// let genes = [0.9, 0.1, 0.1, 0.9];
/// let resolution = SoftPenalty.resolve(&[4, 4], &genes, 2);
/// assert_eq!(resolution.penalty.membership, 0.0);
/// assert_eq!(resolution.penalty.consistency, 500.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftPenalty;

impl GroupingStrategy for SoftPenalty {
    fn name(&self) -> &'static str {
        "soft"
    }

    fn decision_gene_count(&self, record_count: usize, group_count: usize) -> usize {
        record_count * group_count
    }

    fn resolve(&self, signatures: &[u64], genes: &[f64], group_count: usize) -> Resolution {
        let membership = Membership::from_indicators(
            genes.iter().map(|&g| is_active(g)).collect(),
            group_count,
        );

        let penalty = GroupingPenalty {
            membership: membership_penalty(&membership),
            consistency: consistency_penalty(signatures, &membership),
        };

        Resolution {
            membership,
            provisional_groups: None,
            final_groups: None,
            penalty,
        }
    }
}

/// Per-record penalty: `(s - 1) * 100` for a row sum `s > 0`, 100 for an
/// empty row.
pub fn membership_penalty(membership: &Membership) -> f64 {
    (0..membership.record_count())
        .map(|record| match membership.row_sum(record) {
            0 => MEMBERSHIP_PENALTY,
            s => (s - 1) as f64 * MEMBERSHIP_PENALTY,
        })
        .sum()
}

/// Per-signature penalty: `1000 * (total - max) / total`, where `total` is
/// the indicator mass of all records sharing the signature and `max` the
/// largest single-group share of it.
///
/// Zero exactly when every signature's mass sits in one group.
pub fn consistency_penalty(signatures: &[u64], membership: &Membership) -> f64 {
    let group_count = membership.group_count();

    // Ordered so the floating-point sum is identical across runs.
    let mut mass: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
    for (&sig, row) in signatures.iter().zip(membership.rows()) {
        let per_group = mass.entry(sig).or_insert_with(|| vec![0; group_count]);
        for (count, &member) in per_group.iter_mut().zip(row) {
            if member {
                *count += 1;
            }
        }
    }

    mass.values()
        .map(|per_group| {
            let total: u64 = per_group.iter().sum();
            let max = per_group.iter().copied().max().unwrap_or(0);
            if total == max {
                0.0
            } else {
                CONSISTENCY_PENALTY * (total - max) as f64 / total as f64
            }
        })
        .sum()
}
