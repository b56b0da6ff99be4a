//! Splitting a random-key chromosome into its mask and decision genes.

use crate::error::{PartitionError, Result};

/// Gene values strictly above this are "on".
pub const GENE_THRESHOLD: f64 = 0.5;

/// A chromosome split into its two regions.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitChromosome<'a> {
    /// Which categorical attributes take part in the signature.
    pub feature_mask: Vec<bool>,

    /// Remaining genes, untouched. Interpreted by the grouping strategy.
    pub group_genes: &'a [f64],
}

/// Splits `keys` into a feature mask of `feature_count` flags and the
/// remaining decision genes.
///
/// The total length must be exactly `feature_count + decision_gene_count`;
/// a mismatch is never truncated or padded.
///
/// # Examples
///
/// ```
/// use u_cohort::decoder::split_chromosome;
///
/// let keys = [0.7, 0.5, 0.1, 0.9];
/// let split = split_chromosome(&keys, 2, 2).unwrap();
/// assert_eq!(split.feature_mask, vec![true, false]);
/// assert_eq!(split.group_genes, &[0.1, 0.9]);
/// ```
pub fn split_chromosome(
    keys: &[f64],
    feature_count: usize,
    decision_gene_count: usize,
) -> Result<SplitChromosome<'_>> {
    let expected = feature_count + decision_gene_count;
    if keys.len() != expected {
        return Err(PartitionError::InvalidEncodingLength {
            expected,
            actual: keys.len(),
        });
    }

    let (mask_genes, group_genes) = keys.split_at(feature_count);
    Ok(SplitChromosome {
        feature_mask: mask_genes.iter().map(|&g| is_active(g)).collect(),
        group_genes,
    })
}

/// Threshold rule shared by mask genes and dense group indicators.
#[inline]
pub fn is_active(gene: f64) -> bool {
    gene > GENE_THRESHOLD
}

/// Maps a gene in `[0, 1]` to a 0-based group index by uniform partition.
///
/// Boundaries are `(1 / group_count) * j` for `j = 1..=group_count`; the
/// gene lands in the first group whose upper boundary it does not exceed.
/// Anything above the last boundary (or NaN) falls into the last group.
pub fn bucket_group(gene: f64, group_count: usize) -> usize {
    let width = 1.0 / group_count as f64;
    (1..=group_count)
        .position(|j| gene <= width * j as f64)
        .unwrap_or(group_count.saturating_sub(1))
}
