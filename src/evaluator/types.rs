//! Engine-facing decoder trait and evaluation outputs.

use crate::error::Result;
use crate::scoring::Score;
use crate::stats::RatioTable;
use rand::Rng;

/// Fitness reported to the engine when a chromosome cannot be scored
/// (degenerate rate distribution). Finite, and below any real score.
pub const WORST_FITNESS: f64 = f64::MIN;

/// Decoder seam for a random-key engine (BRKGA and relatives).
///
/// Maps a chromosome of keys in `[0, 1]` to a single finite fitness.
/// **Higher is better**: configure the engine to maximize.
///
/// # Examples
///
/// ```ignore
/// let evaluator = PartitionEvaluator::new(store, PartitionConfig::new(6, 5))?;
/// let keys: Vec<f64> = (0..evaluator.chromosome_length()).map(|_| rng.random()).collect();
/// let fitness = evaluator.decode(&keys, false)?;
/// ```
pub trait Decoder: Send + Sync {
    /// Exact number of keys [`decode`](Self::decode) accepts.
    fn chromosome_length(&self) -> usize;

    /// Decodes `keys` and returns its fitness.
    ///
    /// `trace` only adds log output; the returned value is identical.
    ///
    /// # Errors
    ///
    /// [`crate::PartitionError::InvalidEncodingLength`] when
    /// `keys.len() != chromosome_length()`.
    fn decode(&self, keys: &[f64], trace: bool) -> Result<f64>;

    /// Creates a custom initial chromosome.
    ///
    /// Override this to seed the population with a heuristic solution. The
    /// default returns `None` (use random keys).
    fn seed_chromosome<R: Rng>(&self, _rng: &mut R) -> Option<Vec<f64>> {
        None
    }
}

/// Score breakdown of one chromosome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub score: Score,

    /// Alfa per group, in group order.
    pub alfas: Vec<f64>,

    /// Number of records flagged in each group.
    pub group_sizes: Vec<usize>,
}

impl Evaluation {
    pub fn fitness(&self) -> f64 {
        self.score.fitness
    }
}

/// One record after decoding.
///
/// Groups are 1-based here, as they are exported.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedRow {
    /// Attributes after masking (masked-out positions are 0).
    pub attributes: Vec<u32>,
    pub rate: f64,
    pub realized: bool,
    pub signature: u64,

    /// Group read from the record's own gene (hard unification only).
    pub provisional_group: Option<usize>,

    /// Final single group (hard unification only).
    pub group: Option<usize>,

    /// `G1..Gk`.
    pub indicators: Vec<bool>,

    /// `E1..Ek`: indicator AND realized.
    pub realized_indicators: Vec<bool>,
}

/// Fully decoded table for export after a search finishes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedTable {
    pub attribute_names: Vec<String>,
    pub feature_mask: Vec<bool>,
    pub rate_buckets: Vec<f64>,
    pub rows: Vec<DecodedRow>,

    /// Rounded realization ratio per group and rate bucket.
    pub ratios: RatioTable,

    pub evaluation: Evaluation,
}
