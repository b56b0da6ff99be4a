//! Rate/group aggregation and the alfa slope estimator.
//!
//! The aggregator cross-tabulates flagged and realized records per rate
//! bucket and group, then turns the two tables into a ratio table rounded to
//! three decimals. The estimator fits one least-squares slope per group over
//! the rate buckets.

mod alfa;
mod crosstab;
mod rounding;

pub use alfa::{alfa, group_alfas};
pub use crosstab::{CrossTab, RatioTable};
pub use rounding::{round_decimal, round_to, ALFA_DECIMALS, RATIO_DECIMALS};
