//! Combines group alfas and penalties into the fitness scalar.

use crate::grouping::GroupingPenalty;
use crate::stats::{round_decimal, ALFA_DECIMALS};

/// Charged once per group whose member count is below the minimum.
pub const MINIMUM_SIZE_PENALTY: f64 = 1000.0;

/// Breakdown of one fitness value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// Sum of consecutive gaps between sorted, rounded alfas.
    pub spread: f64,

    pub grouping_penalty: GroupingPenalty,

    /// Minimum-group-size penalty (hard unification only).
    pub size_penalty: f64,

    /// `spread - grouping_penalty - size_penalty`. Higher is better.
    pub fitness: f64,
}

/// Turns per-group alfas and penalties into a [`Score`].
///
/// # Examples
///
/// ```
/// use u_cohort::grouping::GroupingPenalty;
/// use u_cohort::scoring::Scorer;
///
/// let scorer = Scorer::new().with_minimum_group_size(2);
/// let score = scorer.score(&[10.0, -5.0, 30.0], GroupingPenalty::default(), &[3, 1, 2]);
/// assert_eq!(score.spread, 35.0);
/// assert_eq!(score.size_penalty, 1000.0);
/// assert_eq!(score.fitness, -965.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    minimum_group_size: usize,
}

impl Scorer {
    /// Creates a scorer without a minimum group size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum member count per group. 0 disables the penalty.
    pub fn with_minimum_group_size(mut self, n: usize) -> Self {
        self.minimum_group_size = n;
        self
    }

    pub fn minimum_group_size(&self) -> usize {
        self.minimum_group_size
    }

    pub fn score(&self, alfas: &[f64], grouping_penalty: GroupingPenalty, group_sizes: &[usize]) -> Score {
        let spread = alfa_spread(alfas);
        let size_penalty = minimum_size_penalty(group_sizes, self.minimum_group_size);
        Score {
            spread,
            grouping_penalty,
            size_penalty,
            fitness: spread - grouping_penalty.total() - size_penalty,
        }
    }
}

/// Sorts the alfas ascending and sums `round2(a[i+1]) - round2(a[i])`.
///
/// Each operand is rounded separately (on its exact binary value, see
/// [`round_decimal`]) before subtracting, then the gaps are accumulated in
/// order.
pub fn alfa_spread(alfas: &[f64]) -> f64 {
    let mut sorted = alfas.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
        .windows(2)
        .fold(0.0, |acc, w| {
            acc + (round_decimal(w[1], ALFA_DECIMALS) - round_decimal(w[0], ALFA_DECIMALS))
        })
}

/// [`MINIMUM_SIZE_PENALTY`] for every group with fewer than `minimum` members.
pub fn minimum_size_penalty(group_sizes: &[usize], minimum: usize) -> f64 {
    group_sizes
        .iter()
        .filter(|&&size| size < minimum)
        .count() as f64
        * MINIMUM_SIZE_PENALTY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::alfa;

    #[test]
    fn test_spread_is_order_independent() {
        assert_eq!(alfa_spread(&[30.0, 0.0, 10.0]), alfa_spread(&[0.0, 10.0, 30.0]));
        assert_eq!(alfa_spread(&[0.0, 0.0, 50.0, 100.0]), 100.0);
    }

    #[test]
    fn test_spread_rounds_operands() {
        // 0.004 rounds to 0.0 and 1.006 to 1.01.
        let s = alfa_spread(&[0.004, 1.006]);
        assert!((s - 1.01).abs() < 1e-12);
    }

    #[test]
    fn test_spread_rounds_stored_value_not_scaled_value() {
        // alfa is the double nearest 2.225, which lies above 2.225;
        // scaling by 100 first would land on 222.5 and round down.
        let rates: Vec<f64> = (1..=8).map(f64::from).collect();
        let ratios = [0.736, 0.404, 0.211, 0.012, 0.308, 0.833, 0.561, 0.582];
        let a = alfa(&rates, &ratios).unwrap();

        let s = alfa_spread(&[0.0, a]);
        assert!((s - 2.23).abs() < 1e-12, "spread {s}");
    }

    #[test]
    fn test_spread_of_single_group() {
        assert_eq!(alfa_spread(&[42.0]), 0.0);
        assert_eq!(alfa_spread(&[]), 0.0);
    }

    #[test]
    fn test_size_penalty_counts_groups_below_minimum() {
        assert_eq!(minimum_size_penalty(&[5, 1, 0, 2], 2), 2000.0);
        assert_eq!(minimum_size_penalty(&[5, 1, 0, 2], 0), 0.0);
        assert_eq!(minimum_size_penalty(&[2, 2], 2), 0.0);
    }

    #[test]
    fn test_size_penalty_strictly_lowers_fitness() {
        let alfas = [1.0, 20.0, 7.5];
        let penalty = GroupingPenalty::default();

        let base = Scorer::new().score(&alfas, penalty, &[1, 4, 4]);
        let below = Scorer::new().with_minimum_group_size(2).score(&alfas, penalty, &[1, 4, 4]);
        let met = Scorer::new().with_minimum_group_size(1).score(&alfas, penalty, &[1, 4, 4]);

        assert!(below.fitness < base.fitness);
        assert_eq!(met.fitness, base.fitness);
    }

    #[test]
    fn test_grouping_penalty_subtracted() {
        let penalty = GroupingPenalty {
            membership: 200.0,
            consistency: 500.0,
        };
        let score = Scorer::new().score(&[0.0, 0.0, 50.0, 100.0], penalty, &[3, 2, 1, 0]);
        assert_eq!(score.fitness, -600.0);
    }
}
