use dim_core::Dimension;

/// Reduces `value` into `[0, modulus)` regardless of its sign.
///
/// `modulus` must be non-zero; every table keeps at least one bucket.
pub fn normalize_mod(value: i64, modulus: usize) -> usize {
    debug_assert!(modulus > 0, "modulus must be positive");
    // i128 keeps moduli above i64::MAX exact.
    (value as i128).rem_euclid(modulus as i128) as usize
}

/// Returns the bucket index of `dim` in a table of `table_size` buckets.
pub(crate) fn slot_of(dim: Dimension, table_size: usize) -> usize {
    normalize_mod(dim.as_raw(), table_size)
}

/// Returns the index `back` steps before `index` on a ring of `len` slots.
pub(crate) fn ring_prev(index: usize, back: usize, len: usize) -> usize {
    (index + len - back % len) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_wrap_forward() {
        assert_eq!(normalize_mod(-1, 4), 3);
        assert_eq!(normalize_mod(-4, 4), 0);
        assert_eq!(normalize_mod(-9, 4), 3);
        assert_eq!(normalize_mod(i64::MIN, 3), 1);
    }

    #[test]
    fn ring_prev_wraps_small_rings() {
        assert_eq!(ring_prev(0, 1, 3), 2);
        assert_eq!(ring_prev(0, 2, 3), 1);
        assert_eq!(ring_prev(1, 2, 2), 1);
        assert_eq!(ring_prev(0, 1, 1), 0);
        assert_eq!(ring_prev(0, 2, 1), 0);
    }
}
