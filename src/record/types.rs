//! Customer record.

/// One customer row of the base table.
///
/// Categorical attributes are already integer-coded (1-based) by the
/// preprocessing step. The attribute order is the order used by the
/// signature radix, so it must match [`super::RecordStore::attribute_names`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Integer-coded categorical attributes.
    pub attributes: Vec<u32>,

    /// Rate bucket value (e.g. an offered interest rate tier).
    pub rate: f64,

    /// Whether the customer realized the outcome.
    pub realized: bool,
}

impl Record {
    /// Creates a new record.
    pub fn new(attributes: Vec<u32>, rate: f64, realized: bool) -> Self {
        Self {
            attributes,
            rate,
            realized,
        }
    }

    /// Returns the attributes with masked-out positions replaced by 0.
    ///
    /// `mask` shorter than the attribute list masks out the tail.
    pub fn masked_attributes(&self, mask: &[bool]) -> Vec<u32> {
        self.attributes
            .iter()
            .enumerate()
            .map(|(i, &v)| if mask.get(i).copied().unwrap_or(false) { v } else { 0 })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_attributes() {
        let r = Record::new(vec![3, 1, 2], 1.0, true);
        assert_eq!(r.masked_attributes(&[true, false, true]), vec![3, 0, 2]);
        assert_eq!(r.masked_attributes(&[false, false, false]), vec![0, 0, 0]);
    }

    #[test]
    fn test_short_mask_zeroes_tail() {
        let r = Record::new(vec![3, 1, 2], 1.0, false);
        assert_eq!(r.masked_attributes(&[true]), vec![3, 0, 0]);
    }
}
