//! Per-group least-squares slope of realization ratio against rate.

use super::crosstab::RatioTable;
use crate::error::{PartitionError, Result};

/// Computes `100 * (n Σxy - Σx Σy) / (n Σx² - (Σx)²)`.
///
/// `rates` are the distinct rate buckets and `ratios` the group's
/// realization ratio in each bucket. A positive value means higher-rate
/// buckets realize proportionally more often within the group.
///
/// # Errors
///
/// [`PartitionError::DegenerateRateDistribution`] when the denominator is
/// zero, i.e. fewer than two distinct rates.
///
/// # Examples
///
/// ```
/// use u_cohort::stats::alfa;
///
/// let a = alfa(&[1.0, 2.0, 3.0], &[0.1, 0.2, 0.3]).unwrap();
/// assert!((a - 10.0).abs() < 1e-9);
/// ```
pub fn alfa(rates: &[f64], ratios: &[f64]) -> Result<f64> {
    debug_assert_eq!(rates.len(), ratios.len());

    let n = rates.len() as f64;
    let sum_xy: f64 = rates.iter().zip(ratios).map(|(x, y)| x * y).sum();
    let sum_x: f64 = rates.iter().sum();
    let sum_y: f64 = ratios.iter().sum();
    let sum_x2: f64 = rates.iter().map(|x| x * x).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(PartitionError::DegenerateRateDistribution {
            buckets: rates.len(),
        });
    }

    Ok((numerator / denominator) * 100.0)
}

/// Alfa of every group in the ratio table, in group order.
pub fn group_alfas(rates: &[f64], table: &RatioTable) -> Result<Vec<f64>> {
    table.rows().map(|row| alfa(rates, row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increasing_ratio_is_positive() {
        let a = alfa(&[1.0, 2.0, 3.0], &[0.1, 0.2, 0.3]).unwrap();
        assert!(a > 0.0);
    }

    #[test]
    fn test_decreasing_ratio_is_negative() {
        let a = alfa(&[1.0, 2.0, 3.0], &[0.5, 0.3, 0.1]).unwrap();
        assert!((a + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_ratio_is_flat() {
        let a = alfa(&[1.0, 2.0, 3.0, 4.0], &[0.4; 4]).unwrap();
        assert!(a.abs() < 1e-9);
    }

    #[test]
    fn test_two_buckets_exact() {
        // (2 * 2.5 - 3 * 1.5) / (2 * 5 - 9) * 100
        let a = alfa(&[1.0, 2.0], &[0.5, 1.0]).unwrap();
        assert_eq!(a, 50.0);
    }

    #[test]
    fn test_single_bucket_is_degenerate() {
        let err = alfa(&[2.5], &[0.3]).unwrap_err();
        assert_eq!(err, PartitionError::DegenerateRateDistribution { buckets: 1 });
    }

    #[test]
    fn test_empty_is_degenerate() {
        assert!(alfa(&[], &[]).is_err());
    }

    #[test]
    fn test_group_alfas() {
        let table = RatioTable::from_rows(&[vec![0.5, 1.0], vec![0.0, 0.0]]);
        let alfas = group_alfas(&[1.0, 2.0], &table).unwrap();
        assert_eq!(alfas, vec![50.0, 0.0]);
    }
}
