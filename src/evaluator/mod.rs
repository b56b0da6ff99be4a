//! Chromosome evaluation for a random-key engine.
//!
//! [`PartitionEvaluator`] runs the whole pipeline for one chromosome:
//!
//! 1. split the keys into feature mask and decision genes
//! 2. derive each record's signature under the mask
//! 3. resolve groups with the configured [`GroupingPolicy`]
//! 4. cross-tabulate realization ratios per rate bucket and group
//! 5. fit one alfa per group and score the spread minus penalties
//!
//! The engine talks to it through [`Decoder`], the same seam a BRKGA engine
//! uses for any problem: the engine owns the population, the decoder only
//! turns keys into a fitness. Higher fitness is better.

mod config;
mod runner;
mod types;

pub use config::{GroupingPolicy, PartitionConfig, MAX_FEATURE_COUNT};
pub use runner::PartitionEvaluator;
pub use types::{DecodedRow, DecodedTable, Decoder, Evaluation, WORST_FITNESS};
