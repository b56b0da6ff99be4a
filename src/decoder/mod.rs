//! Chromosome decoding and signature derivation.
//!
//! A chromosome is a vector of random keys in `[0, 1]`. Its first
//! `feature_count` genes form a mask over the categorical attributes; the
//! masked attributes then collapse into a positional-radix signature that
//! identifies records which must be treated as one logical entity.
//!
//! The remaining genes are handed untouched to the grouping strategy (see
//! [`crate::grouping`]), which reads them either as one bucketed gene per
//! record or as a dense record × group indicator matrix.

mod chromosome;
mod signature;

pub use chromosome::{bucket_group, is_active, split_chromosome, SplitChromosome, GENE_THRESHOLD};
pub use signature::{derive_signatures, signature};
