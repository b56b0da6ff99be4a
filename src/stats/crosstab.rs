//! Rate × group cross-tabulation of participation and realization counts.

use super::rounding::{round_to, RATIO_DECIMALS};
use crate::grouping::Membership;
use crate::record::RecordStore;
use std::collections::BTreeMap;

/// Sparse participation and realization counts keyed by `(bucket, group)`.
///
/// Cells are only created when a count is incremented, so a zero count is
/// never stored: a lookup on it returns `None`, the same as a cell that was
/// never touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossTab {
    bucket_count: usize,
    group_count: usize,
    participation: BTreeMap<(usize, usize), u32>,
    realized: BTreeMap<(usize, usize), u32>,
}

impl CrossTab {
    /// Counts, per rate bucket and group, the flagged records (`G_i = 1`)
    /// and the flagged records that realized the outcome (`E_i = 1`).
    pub fn build(store: &RecordStore, membership: &Membership) -> Self {
        debug_assert_eq!(store.record_count(), membership.record_count());

        let mut tab = Self {
            bucket_count: store.rate_buckets().len(),
            group_count: membership.group_count(),
            ..Self::default()
        };

        for (i, (record, row)) in store.records().iter().zip(membership.rows()).enumerate() {
            let bucket = store.bucket_of(i);
            for (group, _) in row.iter().enumerate().filter(|(_, &m)| m) {
                *tab.participation.entry((bucket, group)).or_insert(0) += 1;
                if record.realized {
                    *tab.realized.entry((bucket, group)).or_insert(0) += 1;
                }
            }
        }
        tab
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Records of `group` in `bucket`; `None` when there are none.
    pub fn participation(&self, bucket: usize, group: usize) -> Option<u32> {
        self.participation.get(&(bucket, group)).copied()
    }

    /// Realized records of `group` in `bucket`; `None` when there are none.
    pub fn realized(&self, bucket: usize, group: usize) -> Option<u32> {
        self.realized.get(&(bucket, group)).copied()
    }

    /// Realized / participation per cell, rounded to three decimals.
    ///
    /// A cell missing from either table has an undefined ratio and is filled
    /// with 0. A group with no participation at all is a row of zeros.
    pub fn ratio_table(&self) -> RatioTable {
        let mut ratios = Vec::with_capacity(self.group_count * self.bucket_count);
        for group in 0..self.group_count {
            for bucket in 0..self.bucket_count {
                let ratio = match (self.realized(bucket, group), self.participation(bucket, group)) {
                    (Some(e), Some(p)) => round_to(f64::from(e) / f64::from(p), RATIO_DECIMALS),
                    _ => 0.0,
                };
                ratios.push(ratio);
            }
        }
        RatioTable {
            bucket_count: self.bucket_count,
            ratios,
        }
    }
}

/// Dense group × bucket table of rounded realization ratios.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatioTable {
    bucket_count: usize,
    ratios: Vec<f64>,
}

impl RatioTable {
    /// Builds a table from group rows; every row must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        Self {
            bucket_count: rows.first().map_or(0, Vec::len),
            ratios: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn group_count(&self) -> usize {
        if self.bucket_count == 0 {
            0
        } else {
            self.ratios.len() / self.bucket_count
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Ratios of `group`, one per rate bucket in ascending rate order.
    pub fn group(&self, group: usize) -> &[f64] {
        let start = group * self.bucket_count;
        &self.ratios[start..start + self.bucket_count]
    }

    /// Iterates over group rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.ratios.chunks(self.bucket_count.max(1))
    }
}
