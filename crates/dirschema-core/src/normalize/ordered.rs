//! Module: normalize::ordered
//! Responsibility: fixed-width scalar byte transforms preserving order.
//! Does not own: parsing of textual values.
//! Boundary: rules call these once a value has been decoded.

/// Sign-biased big-endian encoding; byte order equals numeric order.
#[must_use]
pub const fn ordered_i64_bytes(value: i64) -> [u8; 8] {
    let biased = value.cast_unsigned() ^ (1u64 << 63);
    biased.to_be_bytes()
}

/// Smallest byte string strictly greater than every string starting with
/// `prefix`, or `None` when the prefix is all `0xFF`.
#[must_use]
pub fn prefix_successor(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut out = prefix.to_vec();
    while let Some(last) = out.pop() {
        if last < u8::MAX {
            out.push(last + 1);
            return Some(out);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_i64_preserves_numeric_order() {
        let values = [i64::MIN, -1_000, -1, 0, 1, 42, i64::MAX];
        let encoded: Vec<_> = values.iter().map(|v| ordered_i64_bytes(*v)).collect();

        assert!(encoded.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn prefix_successor_carries_past_max_bytes() {
        assert_eq!(prefix_successor(b"ab"), Some(b"ac".to_vec()));
        assert_eq!(prefix_successor(&[0x61, 0xFF]), Some(vec![0x62]));
        assert_eq!(prefix_successor(&[0xFF, 0xFF]), None);
        assert_eq!(prefix_successor(&[]), None);
    }
}
