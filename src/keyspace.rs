//! Two-letter keyspace enumeration, sequential and partitioned.
//!
//! The keyspace is the 676 ordered pairs of lowercase Latin letters,
//! flattened row-major: index `i` maps to `ALPHABET[i / 26]` followed by
//! `ALPHABET[i % 26]`. The partitioned variant splits the index range
//! into four contiguous chunks, generates each chunk on its own worker,
//! and merges the partial results by chunk index so the output order is
//! deterministic no matter which worker finishes first.

use rayon::prelude::*;

pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Total number of two-letter combinations (26 * 26).
pub const KEYSPACE_SIZE: usize = ALPHABET.len() * ALPHABET.len();

/// Fixed worker count for the partitioned generator. A design constant,
/// not derived from available hardware parallelism.
pub const WORKERS: usize = 4;

/// Maps a keyspace index to its two-letter combination.
pub fn to_pair(index: usize) -> String {
    debug_assert!(index < KEYSPACE_SIZE);
    let mut pair = String::with_capacity(2);
    pair.push(ALPHABET[index / ALPHABET.len()] as char);
    pair.push(ALPHABET[index % ALPHABET.len()] as char);
    pair
}

/// Lazy enumeration of the full keyspace in order: "aa", "ab", ..., "zz".
pub fn letter_combinations() -> impl Iterator<Item = String> {
    (0..KEYSPACE_SIZE).map(to_pair)
}

/// Splits `[0, total)` into `workers` contiguous half-open ranges.
/// All chunks have equal size except the last, which absorbs any
/// remainder (676 / 4 leaves none).
fn chunk_bounds(total: usize, workers: usize) -> Vec<(usize, usize)> {
    let base = total / workers;
    (0..workers)
        .map(|k| {
            let start = k * base;
            let end = if k + 1 == workers { total } else { start + base };
            (start, end)
        })
        .collect()
}

fn generate_chunk(start: usize, end: usize) -> Vec<String> {
    (start..end).map(to_pair).collect()
}

/// Generates the first `requested` two-letter combinations using a
/// four-way partition of the keyspace.
///
/// `requested <= 0` yields an empty vec; values above 676 are clamped
/// silently. The full keyspace is always computed internally (the
/// partition granularity is fixed), then truncated to the requested
/// length. Output is always in lexicographic order: partial results are
/// collected into chunk-indexed slots, not in completion order.
pub fn partition_and_generate(requested: i64) -> Vec<String> {
    if requested <= 0 {
        return Vec::new();
    }
    let count = (requested as usize).min(KEYSPACE_SIZE);

    let chunks = chunk_bounds(KEYSPACE_SIZE, WORKERS);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKERS)
        .build()
        .expect("failed to build worker pool");

    // Indexed collect places each chunk's output at its own slot, so the
    // merge order is chunk order even when completion order differs.
    let partials: Vec<Vec<String>> = pool.install(|| {
        chunks
            .par_iter()
            .map(|&(start, end)| generate_chunk(start, end))
            .collect()
    });

    tracing::debug!(workers = WORKERS, count, "merging {} chunks", partials.len());

    let mut merged: Vec<String> = partials.into_iter().flatten().collect();
    merged.truncate(count);
    merged
}
