//! Length filter over a whitespace-separated list of city names.

use crate::error::{GeneratorError, Result};

/// Names must be strictly longer than this many characters to pass.
pub const MIN_NAME_LEN: usize = 5;

/// Filters a whitespace-separated list down to the names longer than
/// [`MIN_NAME_LEN`] characters.
///
/// Length is counted in characters, not bytes, so non-ASCII names filter
/// correctly. A blank input is a domain error; an input with no long
/// names is an empty result, not an error.
pub fn filter_long_cities(input: &str) -> Result<Vec<String>> {
    if input.trim().is_empty() {
        return Err(GeneratorError::new("city list must not be empty"));
    }
    Ok(input
        .split_whitespace()
        .filter(|city| city.chars().count() > MIN_NAME_LEN)
        .map(str::to_owned)
        .collect())
}
