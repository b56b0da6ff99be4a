//! Positional-radix signatures identifying duplicate entities.

use crate::record::Record;

/// Computes `Σ value[i] * 10^i` over the attributes, with masked-out
/// positions contributing 0.
///
/// Values above 9 overlap neighbouring digits and may collide; callers
/// are expected to keep attribute codes in `0..=9`. Arithmetic wraps instead
/// of panicking.
///
/// # Examples
///
/// ```
/// use u_cohort::decoder::signature;
///
/// assert_eq!(signature(&[3, 1, 2], &[true, true, true]), 213);
/// assert_eq!(signature(&[3, 1, 2], &[true, false, true]), 203);
/// ```
pub fn signature(attributes: &[u32], mask: &[bool]) -> u64 {
    let mut place: u64 = 1;
    let mut key: u64 = 0;
    for (i, &value) in attributes.iter().enumerate() {
        if mask.get(i).copied().unwrap_or(false) {
            key = key.wrapping_add(u64::from(value).wrapping_mul(place));
        }
        place = place.wrapping_mul(10);
    }
    key
}

/// Signature of every record under `mask`, in record order.
pub fn derive_signatures(records: &[Record], mask: &[bool]) -> Vec<u64> {
    records
        .iter()
        .map(|r| signature(&r.attributes, mask))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_masked_collapses() {
        assert_eq!(signature(&[7, 4, 1, 5, 2], &[false; 5]), 0);
        assert_eq!(signature(&[1, 1, 1, 1, 1], &[false; 5]), 0);
    }

    #[test]
    fn test_positional_weights() {
        assert_eq!(signature(&[1, 0, 0, 0, 0], &[true; 5]), 1);
        assert_eq!(signature(&[0, 0, 0, 0, 1], &[true; 5]), 10_000);
        assert_eq!(signature(&[7, 2, 3, 4, 3], &[true; 5]), 34_327);
    }

    #[test]
    fn test_equal_masked_values_collide() {
        let mask = [true, false, true];
        assert_eq!(signature(&[2, 1, 3], &mask), signature(&[2, 9, 3], &mask));
        assert_ne!(signature(&[2, 1, 3], &mask), signature(&[2, 1, 4], &mask));
    }

    #[test]
    fn test_oversized_codes_overlap() {
        // 10 at position 0 reads the same as 1 at position 1.
        assert_eq!(signature(&[10, 0], &[true, true]), signature(&[0, 1], &[true, true]));
    }

    #[test]
    fn test_derive_signatures() {
        let records = vec![
            Record::new(vec![1, 2], 1.0, true),
            Record::new(vec![1, 3], 1.0, false),
        ];
        assert_eq!(derive_signatures(&records, &[true, false]), vec![1, 1]);
        assert_eq!(derive_signatures(&records, &[true, true]), vec![21, 31]);
    }
}
