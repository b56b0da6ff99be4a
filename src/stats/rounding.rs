//! Decimal rounding at the documented rounding points.
//!
//! Ratios and alfas are rounded differently. Ratios are scaled and rounded
//! as floats ([`round_to`]); alfas are rounded on their exact binary value
//! ([`round_decimal`]). The two disagree when `value * 10^d` lands on a
//! `.5` only because of the multiplication's own rounding.

/// Decimals kept on realization ratios.
pub const RATIO_DECIMALS: i32 = 3;

/// Decimals kept on each alfa before the gaps are summed.
pub const ALFA_DECIMALS: i32 = 2;

/// Rounds `value` to `decimals` places, ties to even on the scaled value.
///
/// Non-finite values pass through unchanged.
///
/// # Examples
///
/// ```
/// use u_cohort::stats::round_to;
///
/// assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
/// assert_eq!(round_to(0.0625, 3), 0.062);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Rounds the exact binary value of `value` to `decimals` places
/// (`decimals >= 0`), ties to even only on exact decimal ties.
///
/// Values too large to carry a fractional digit, and non-finite values,
/// pass through unchanged.
///
/// # Examples
///
/// ```
/// use u_cohort::stats::round_decimal;
///
/// // The double nearest 2.675 lies just below it.
/// assert_eq!(round_decimal(2.675, 2), 2.67);
/// // 0.125 is an exact tie.
/// assert_eq!(round_decimal(0.125, 2), 0.12);
/// ```
pub fn round_decimal(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }

    // value * scale == scaled + residual, exactly.
    let residual = value.mul_add(scale, -scaled);
    let floor = scaled.floor();
    let excess = (scaled - floor) - 0.5;

    let rounded = if excess < -residual {
        floor
    } else if excess > -residual {
        floor + 1.0
    } else if floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    rounded / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_to_even() {
        assert_eq!(round_to(0.0625, 3), 0.062);
        assert_eq!(round_to(0.1875, 3), 0.188);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(round_to(1.0 / 3.0, 3), 0.333);
        assert_eq!(round_to(33.399999999999, 2), 33.4);
        assert_eq!(round_to(-12.345678, 2), -12.35);
        assert_eq!(round_to(0.0, 3), 0.0);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_to(f64::NAN, 3).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
        assert!(round_decimal(f64::NAN, 2).is_nan());
        assert_eq!(round_decimal(f64::NEG_INFINITY, 2), f64::NEG_INFINITY);
    }

    #[test]
    fn test_decimal_uses_exact_binary_value() {
        // 2.225 is stored slightly above, 2.675 slightly below.
        assert_eq!(round_decimal(2.225, 2), 2.23);
        assert_eq!(round_decimal(2.675, 2), 2.67);
        assert_eq!(round_to(2.225, 2), 2.22);
    }

    #[test]
    fn test_decimal_exact_ties() {
        assert_eq!(round_decimal(0.125, 2), 0.12);
        assert_eq!(round_decimal(0.375, 2), 0.38);
        assert_eq!(round_decimal(2.5, 0), 2.0);
        assert_eq!(round_decimal(-2.5, 0), -2.0);
        assert_eq!(round_decimal(-0.375, 2), -0.38);
    }

    #[test]
    fn test_decimal_plain_values() {
        assert_eq!(round_decimal(33.399999999999, 2), 33.4);
        assert_eq!(round_decimal(-12.345678, 2), -12.35);
        assert_eq!(round_decimal(1.006, 2), 1.01);
        assert_eq!(round_decimal(0.004, 2), 0.0);
        assert_eq!(round_decimal(1e300, 2), 1e300);
    }
}
