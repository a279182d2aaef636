//! Bucket-count staging: the fixed ascending sequence of prime bucket
//! counts and the occupancy threshold that advances through it.
//!
//! The table always uses one of these counts. Growth only moves forward;
//! once the last stage is reached the table stays there and chains grow
//! unbounded instead of failing.

/// Ascending prime bucket counts the table steps through as it grows.
pub(crate) const BUCKET_COUNTS: [usize; 8] =
    [509, 1021, 2039, 4093, 8191, 16381, 32749, 65521];

/// The first stage; a new table starts here.
pub(crate) const INITIAL_BUCKET_COUNT: usize = BUCKET_COUNTS[0];

/// The stage after `current`, or `None` once the sequence is exhausted.
///
/// `current` must be a member of [`BUCKET_COUNTS`]; the table never holds
/// any other count.
pub(crate) fn next_bucket_count(current: usize) -> Option<usize> {
    let stage = BUCKET_COUNTS.iter().position(|&c| c == current)?;
    BUCKET_COUNTS.get(stage + 1).copied()
}

/// Occupancy level at which a table with `bucket_count` buckets grows:
/// one less than the bucket count, so growth happens before the table
/// becomes denser than about one binding per bucket.
pub(crate) fn growth_threshold(bucket_count: usize) -> usize {
    bucket_count - 1
}
