//! Customer records and the immutable base table.
//!
//! The preprocessing collaborator hands over a rectangular table whose
//! categorical columns are already mapped to small positive integers. This
//! module only validates the shape and indexes the rate axis; it never
//! re-encodes values.

mod store;
mod types;

pub use store::RecordStore;
pub use types::Record;
