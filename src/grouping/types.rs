//! Core trait and data shared by the grouping strategies.

/// Record × group indicator matrix, record-major.
///
/// Under hard unification every row holds exactly one `true`; under the soft
/// policy a row may hold zero or several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    group_count: usize,
    indicators: Vec<bool>,
}

impl Membership {
    /// Creates an all-`false` matrix.
    pub fn new(record_count: usize, group_count: usize) -> Self {
        Self {
            group_count,
            indicators: vec![false; record_count * group_count],
        }
    }

    /// Builds a matrix with exactly one indicator per record.
    pub fn from_assignment(groups: &[usize], group_count: usize) -> Self {
        let mut membership = Self::new(groups.len(), group_count);
        for (row, &g) in membership
            .indicators
            .chunks_mut(group_count.max(1))
            .zip(groups)
        {
            if let Some(cell) = row.get_mut(g) {
                *cell = true;
            }
        }
        membership
    }

    /// Builds a matrix from a flat record-major slice of flags.
    pub fn from_indicators(indicators: Vec<bool>, group_count: usize) -> Self {
        Self {
            group_count,
            indicators,
        }
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn record_count(&self) -> usize {
        if self.group_count == 0 {
            0
        } else {
            self.indicators.len() / self.group_count
        }
    }

    /// Iterates over record rows.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.indicators.chunks(self.group_count.max(1))
    }

    /// Indicator row of record `record`.
    pub fn row(&self, record: usize) -> &[bool] {
        let start = record * self.group_count;
        &self.indicators[start..start + self.group_count]
    }

    /// Number of groups record `record` belongs to.
    pub fn row_sum(&self, record: usize) -> usize {
        self.row(record).iter().filter(|&&m| m).count()
    }

    /// Number of records flagged in each group (`G_i` column sums).
    pub fn group_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.group_count];
        for row in self.rows() {
            for (size, &member) in sizes.iter_mut().zip(row) {
                if member {
                    *size += 1;
                }
            }
        }
        sizes
    }
}

/// Penalty terms produced while resolving groups.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingPenalty {
    /// Charged for records in zero or several groups.
    pub membership: f64,

    /// Charged for signatures whose records are split across groups.
    pub consistency: f64,
}

impl GroupingPenalty {
    pub fn total(&self) -> f64 {
        self.membership + self.consistency
    }
}

/// Outcome of a grouping strategy for one chromosome.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Final indicator matrix.
    pub membership: Membership,

    /// Group read from each record's own gene, before unification.
    /// `None` for strategies that do not bucket genes.
    pub provisional_groups: Option<Vec<usize>>,

    /// Single final group per record, when the strategy assigns one.
    pub final_groups: Option<Vec<usize>>,

    pub penalty: GroupingPenalty,
}

/// Reconciles group genes with the signature-equivalence constraint.
///
/// Implementations must not keep state between calls: anything memoized
/// while resolving one chromosome lives inside [`resolve`](Self::resolve).
pub trait GroupingStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Number of decision genes this strategy reads after the feature mask.
    fn decision_gene_count(&self, record_count: usize, group_count: usize) -> usize;

    /// Resolves the final membership of every record.
    ///
    /// `genes` has exactly
    /// [`decision_gene_count`](Self::decision_gene_count) elements and
    /// `signatures` one element per record.
    fn resolve(&self, signatures: &[u64], genes: &[f64], group_count: usize) -> Resolution;

    /// Whether the scorer should apply the minimum-group-size penalty.
    fn enforces_minimum_size(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_assignment() {
        let m = Membership::from_assignment(&[0, 2, 2], 3);
        assert_eq!(m.record_count(), 3);
        assert_eq!(m.row(0), &[true, false, false]);
        assert_eq!(m.row(1), &[false, false, true]);
        assert_eq!(m.group_sizes(), vec![1, 0, 2]);
    }

    #[test]
    fn test_row_sum_tolerates_multi_membership() {
        let m = Membership::from_indicators(vec![true, true, false, false], 2);
        assert_eq!(m.row_sum(0), 2);
        assert_eq!(m.row_sum(1), 0);
        assert_eq!(m.group_sizes(), vec![1, 1]);
    }

    #[test]
    fn test_penalty_total() {
        let p = GroupingPenalty {
            membership: 200.0,
            consistency: 500.0,
        };
        assert!((p.total() - 700.0).abs() < 1e-12);
    }
}
