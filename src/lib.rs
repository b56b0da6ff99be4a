//! Fitness decoding for rate-sensitivity customer partitioning.
//!
//! A customer population is split into a fixed number of groups. Each
//! candidate partition is encoded as a random-key chromosome and scored by:
//!
//! - **Rate spread**: per group, the least-squares slope ("alfa") of the
//!   realization ratio against the rate bucket. Partitions whose group alfas
//!   are widely and evenly staggered score higher.
//! - **Grouping constraints**: records with the same signature (identical
//!   masked categorical attributes) represent one entity and belong in one
//!   group. Depending on the [`evaluator::GroupingPolicy`], this is enforced
//!   by unification or charged as a penalty.
//!
//! # Architecture
//!
//! The search itself belongs to an external random-key engine. This crate
//! supplies only the decoder that engine calls for every chromosome:
//!
//! - [`record`]: the immutable base table
//! - [`decoder`]: chromosome split and signature derivation
//! - [`grouping`]: hard-unification and soft-penalty strategies
//! - [`stats`]: rate × group cross-tabulation and alfa estimation
//! - [`scoring`]: alfa spread and penalties into one fitness
//! - [`evaluator`]: the pipeline and the [`evaluator::Decoder`] seam

pub mod decoder;
pub mod error;
pub mod evaluator;
pub mod grouping;
pub mod record;
pub mod scoring;
pub mod stats;

pub use error::{PartitionError, Result};
