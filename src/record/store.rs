//! Immutable base table shared by all evaluations.

use super::types::Record;
use crate::error::{PartitionError, Result};

/// The cleaned, integer-encoded customer table.
///
/// Built once from the preprocessing output and never mutated afterwards.
/// Every evaluation derives its own signatures and memberships from it, so a
/// single store can back any number of sequential or concurrent evaluations.
///
/// Construction precomputes the sorted distinct rate buckets and each
/// record's bucket index, which the aggregator uses as its row axis.
///
/// # Examples
///
/// ```
/// use u_cohort::record::{Record, RecordStore};
///
/// let store = RecordStore::new(
///     vec!["region".into(), "risk".into()],
///     vec![
///         Record::new(vec![1, 2], 2.0, true),
///         Record::new(vec![2, 2], 1.0, false),
///         Record::new(vec![1, 1], 2.0, false),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(store.record_count(), 3);
/// assert_eq!(store.rate_buckets(), &[1.0, 2.0]);
/// assert_eq!(store.bucket_of(0), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    attribute_names: Vec<String>,
    records: Vec<Record>,
    rate_buckets: Vec<f64>,
    bucket_index: Vec<usize>,
}

impl RecordStore {
    /// Builds a store, validating that every record carries one value per
    /// attribute name and a finite rate.
    pub fn new(attribute_names: Vec<String>, records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(PartitionError::InvalidRecordStore(
                "store must contain at least one record".into(),
            ));
        }
        if attribute_names.is_empty() {
            return Err(PartitionError::InvalidRecordStore(
                "store must declare at least one attribute".into(),
            ));
        }

        let width = attribute_names.len();
        for (i, record) in records.iter().enumerate() {
            if record.attributes.len() != width {
                return Err(PartitionError::InvalidRecordStore(format!(
                    "record {} has {} attributes, expected {}",
                    i,
                    record.attributes.len(),
                    width
                )));
            }
            if !record.rate.is_finite() {
                return Err(PartitionError::InvalidRecordStore(format!(
                    "record {} has non-finite rate {}",
                    i, record.rate
                )));
            }
        }

        let mut rate_buckets: Vec<f64> = records.iter().map(|r| r.rate).collect();
        rate_buckets.sort_by(f64::total_cmp);
        rate_buckets.dedup_by(|a, b| a.total_cmp(b).is_eq());

        // Rates are finite and present in the bucket list, so the search hits.
        let bucket_index = records
            .iter()
            .map(|r| {
                rate_buckets
                    .binary_search_by(|b| b.total_cmp(&r.rate))
                    .unwrap_or_default()
            })
            .collect();

        Ok(Self {
            attribute_names,
            records,
            rate_buckets,
            bucket_index,
        })
    }

    /// Number of records. Never zero.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of categorical attributes per record.
    pub fn attribute_count(&self) -> usize {
        self.attribute_names.len()
    }

    /// Ordered attribute names.
    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Sorted distinct rate values.
    pub fn rate_buckets(&self) -> &[f64] {
        &self.rate_buckets
    }

    /// Index into [`rate_buckets`](Self::rate_buckets) of record `i`'s rate.
    pub fn bucket_of(&self, i: usize) -> usize {
        self.bucket_index[i]
    }
}
