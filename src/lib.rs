//! Teaching-lab generator utilities.
//!
//! Three independent demos live here: enumeration of the two-letter
//! keyspace (sequentially, or split across a fixed four-worker partition
//! with deterministic merge order), a polynomial sampler over an
//! inclusive range, and a length filter over a list of city names.

pub mod cities;
pub mod error;
pub mod keyspace;
pub mod sampler;

pub use cities::filter_long_cities;
pub use error::{GeneratorError, Result};
pub use keyspace::{letter_combinations, partition_and_generate};
pub use sampler::sample_polynomial;

/// First `n` items of any iterator. An iterator shorter than `n` yields
/// just what exists; `n == 0` yields nothing.
pub fn first_n<I>(items: I, n: usize) -> Vec<I::Item>
where
    I: IntoIterator,
{
    items.into_iter().take(n).collect()
}
