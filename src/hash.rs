//! The fixed multiplicative string hash used to place keys in buckets.
//!
//! Deterministic and pure by contract: lookup and removal recompute the
//! index that was used at insertion time, so the same key under the same
//! bucket count must always land in the same bucket. This is why the
//! table is not generic over `BuildHasher`.

const HASH_MULTIPLIER: u64 = 65599;

/// Accumulate `hash = hash * 65599 + byte` over the key's bytes.
pub(crate) fn hash_key(key: &str) -> u64 {
    key.bytes().fold(0u64, |h, b| {
        h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u64::from(b))
    })
}

/// Bucket index for `key` in a table with `bucket_count` buckets.
pub(crate) fn bucket_index(key: &str, bucket_count: usize) -> usize {
    (hash_key(key) % bucket_count as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_same_key_and_count() {
        for count in [509usize, 1021, 65521] {
            assert_eq!(
                bucket_index("determinism", count),
                bucket_index("determinism", count)
            );
        }
    }

    #[test]
    fn known_accumulator_values() {
        assert_eq!(hash_key(""), 0);
        assert_eq!(hash_key("a"), u64::from(b'a'));
        // "ab" = 'a' * 65599 + 'b'
        assert_eq!(hash_key("ab"), 97 * 65599 + 98);
    }

    #[test]
    fn index_is_always_in_range() {
        for key in ["", "a", "zz", "some longer key with spaces", "\u{1F980}"] {
            assert!(bucket_index(key, 509) < 509);
            assert!(bucket_index(key, 65521) < 65521);
        }
    }
}
