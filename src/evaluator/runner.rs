//! Decoding pipeline from chromosome to fitness.

use super::config::{GroupingPolicy, PartitionConfig};
use super::types::{DecodedRow, DecodedTable, Decoder, Evaluation, WORST_FITNESS};
use crate::decoder::{derive_signatures, split_chromosome, SplitChromosome};
use crate::error::{PartitionError, Result};
use crate::grouping::{GroupingStrategy, HardUnification, Resolution, SoftPenalty};
use crate::record::RecordStore;
use crate::scoring::Scorer;
use crate::stats::{group_alfas, CrossTab, RatioTable};
use rand::Rng;
use std::collections::HashMap;

/// Everything produced while decoding one chromosome.
struct Decoded<'a> {
    split: SplitChromosome<'a>,
    signatures: Vec<u64>,
    resolution: Resolution,
    ratios: RatioTable,
    evaluation: Evaluation,
}

/// Scores chromosomes against an immutable record store.
///
/// The evaluator holds no per-call state: the signature memo, tables and
/// penalties of one decode live on that call's stack. It is `Send + Sync`
/// and can be shared by an engine that decodes chromosomes concurrently.
///
/// # Examples
///
/// ```
/// use u_cohort::evaluator::{Decoder, PartitionConfig, PartitionEvaluator};
/// use u_cohort::record::{Record, RecordStore};
///
/// let store = RecordStore::new(
///     vec!["segment".into()],
///     vec![
///         Record::new(vec![1], 1.0, false),
///         Record::new(vec![2], 2.0, true),
///         Record::new(vec![3], 1.0, true),
///         Record::new(vec![4], 2.0, true),
///     ],
/// )
/// .unwrap();
///
/// let evaluator = PartitionEvaluator::new(store, PartitionConfig::new(2, 1)).unwrap();
/// assert_eq!(evaluator.chromosome_length(), 5);
///
/// let fitness = evaluator.decode(&[0.9, 0.2, 0.2, 0.7, 0.7], false).unwrap();
/// assert!(fitness.is_finite());
/// ```
pub struct PartitionEvaluator {
    store: RecordStore,
    config: PartitionConfig,
    strategy: Box<dyn GroupingStrategy>,
    scorer: Scorer,
}

impl PartitionEvaluator {
    /// Creates an evaluator.
    ///
    /// # Errors
    ///
    /// [`PartitionError::InvalidConfig`] when the configuration is invalid or
    /// `feature_count` differs from the store's attribute count.
    pub fn new(store: RecordStore, config: PartitionConfig) -> Result<Self> {
        config.validate()?;
        if store.attribute_count() != config.feature_count {
            return Err(PartitionError::InvalidConfig(format!(
                "feature_count ({}) does not match the store's {} attributes",
                config.feature_count,
                store.attribute_count()
            )));
        }

        let strategy: Box<dyn GroupingStrategy> = match config.policy {
            GroupingPolicy::Hard => Box::new(HardUnification),
            GroupingPolicy::Soft => Box::new(SoftPenalty),
        };

        let scorer = if strategy.enforces_minimum_size() {
            Scorer::new().with_minimum_group_size(config.minimum_group_size)
        } else {
            if config.minimum_group_size > 0 {
                log::warn!(
                    "minimum_group_size ({}) is ignored by the {} grouping policy",
                    config.minimum_group_size,
                    strategy.name()
                );
            }
            Scorer::new()
        };

        Ok(Self {
            store,
            config,
            strategy,
            scorer,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Genes after the feature mask.
    pub fn decision_gene_count(&self) -> usize {
        self.strategy
            .decision_gene_count(self.store.record_count(), self.config.group_count)
    }

    /// Scores `keys` and returns the breakdown.
    ///
    /// # Errors
    ///
    /// [`PartitionError::InvalidEncodingLength`] on a length mismatch,
    /// [`PartitionError::DegenerateRateDistribution`] when the store has
    /// fewer than two distinct rates.
    pub fn evaluate(&self, keys: &[f64]) -> Result<Evaluation> {
        Ok(self.run(keys)?.evaluation)
    }

    /// Decodes `keys` into the full per-record table, for export.
    pub fn decode_table(&self, keys: &[f64]) -> Result<DecodedTable> {
        let Decoded {
            split,
            signatures,
            resolution,
            ratios,
            evaluation,
        } = self.run(keys)?;

        let rows = self
            .store
            .records()
            .iter()
            .zip(resolution.membership.rows())
            .enumerate()
            .map(|(i, (record, row))| DecodedRow {
                attributes: record.masked_attributes(&split.feature_mask),
                rate: record.rate,
                realized: record.realized,
                signature: signatures[i],
                provisional_group: resolution.provisional_groups.as_ref().map(|g| g[i] + 1),
                group: resolution.final_groups.as_ref().map(|g| g[i] + 1),
                indicators: row.to_vec(),
                realized_indicators: row.iter().map(|&m| m && record.realized).collect(),
            })
            .collect();

        Ok(DecodedTable {
            attribute_names: self.store.attribute_names().to_vec(),
            feature_mask: split.feature_mask,
            rate_buckets: self.store.rate_buckets().to_vec(),
            rows,
            ratios,
            evaluation,
        })
    }

    fn run<'a>(&self, keys: &'a [f64]) -> Result<Decoded<'a>> {
        let group_count = self.config.group_count;

        let split = split_chromosome(keys, self.config.feature_count, self.decision_gene_count())?;
        let signatures = derive_signatures(self.store.records(), &split.feature_mask);
        let resolution = self
            .strategy
            .resolve(&signatures, split.group_genes, group_count);

        let ratios = CrossTab::build(&self.store, &resolution.membership).ratio_table();
        let alfas = group_alfas(self.store.rate_buckets(), &ratios)?;
        let group_sizes = resolution.membership.group_sizes();
        let score = self.scorer.score(&alfas, resolution.penalty, &group_sizes);

        Ok(Decoded {
            split,
            signatures,
            resolution,
            ratios,
            evaluation: Evaluation {
                score,
                alfas,
                group_sizes,
            },
        })
    }
}

impl Decoder for PartitionEvaluator {
    fn chromosome_length(&self) -> usize {
        self.config.feature_count + self.decision_gene_count()
    }

    fn decode(&self, keys: &[f64], trace: bool) -> Result<f64> {
        let outcome = if trace {
            self.decode_table(keys).map(|table| {
                log_table(&table, self.strategy.name());
                table.evaluation.fitness()
            })
        } else {
            self.evaluate(keys).map(|e| e.fitness())
        };

        match outcome {
            Err(PartitionError::DegenerateRateDistribution { buckets }) => {
                log::warn!(
                    "degenerate rate distribution ({} bucket(s)), reporting worst fitness",
                    buckets
                );
                Ok(WORST_FITNESS)
            }
            other => other,
        }
    }

    /// Full mask, and records spread round-robin over the groups by distinct
    /// signature, so duplicates start together and groups start balanced.
    fn seed_chromosome<R: Rng>(&self, rng: &mut R) -> Option<Vec<f64>> {
        let feature_count = self.config.feature_count;
        let group_count = self.config.group_count;

        let mut keys = Vec::with_capacity(self.chromosome_length());
        keys.extend((0..feature_count).map(|_| rng.random_range(0.75..1.0)));

        let signatures = derive_signatures(self.store.records(), &vec![true; feature_count]);
        let mut rank: HashMap<u64, usize> = HashMap::new();
        let groups: Vec<usize> = signatures
            .iter()
            .map(|&sig| {
                let next = rank.len();
                *rank.entry(sig).or_insert(next) % group_count
            })
            .collect();

        match self.config.policy {
            GroupingPolicy::Hard => {
                let width = group_count as f64;
                keys.extend(
                    groups
                        .iter()
                        .map(|&g| (g as f64 + rng.random_range(0.25..0.75)) / width),
                );
            }
            GroupingPolicy::Soft => {
                for &g in &groups {
                    keys.extend((0..group_count).map(|j| {
                        if j == g {
                            rng.random_range(0.75..1.0)
                        } else {
                            rng.random_range(0.0..0.25)
                        }
                    }));
                }
            }
        }

        Some(keys)
    }
}

fn log_table(table: &DecodedTable, policy: &str) {
    let e = &table.evaluation;
    log::debug!(
        "decoded ({} policy): mask={:?} sizes={:?} alfas={:?} spread={} grouping_penalty={} size_penalty={} fitness={}",
        policy,
        table.feature_mask,
        e.group_sizes,
        e.alfas,
        e.score.spread,
        e.score.grouping_penalty.total(),
        e.score.size_penalty,
        e.score.fitness
    );
    for (g, row) in table.ratios.rows().enumerate() {
        log::trace!("group {} ratios by rate {:?}: {:?}", g + 1, table.rate_buckets, row);
    }
}
