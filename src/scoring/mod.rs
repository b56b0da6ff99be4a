//! Fitness scoring.
//!
//! The objective rewards partitions whose groups are evenly staggered in
//! their rate sensitivity: the group alfas are sorted and their consecutive
//! gaps summed. Grouping and minimum-size penalties are subtracted from that
//! spread. The external engine maximizes the result.

mod scorer;

pub use scorer::{alfa_spread, minimum_size_penalty, Score, Scorer, MINIMUM_SIZE_PENALTY};
