//! Sampler for f(x) = 0.1x^2 + 5x - 2 over an inclusive range.

use crate::error::{GeneratorError, Result};

/// Default sampling range and step used by the demo shell.
pub const DEFAULT_START: f64 = -5.0;
pub const DEFAULT_END: f64 = 7.0;
pub const DEFAULT_STEP: f64 = 0.01;

/// The sampled polynomial.
pub fn polynomial(x: f64) -> f64 {
    0.1 * x * x + 5.0 * x - 2.0
}

/// Samples the polynomial from `start` to `end` inclusive in increments
/// of `step`.
///
/// Invalid parameters (`start > end`, `step <= 0`) are rejected here, at
/// call time, not on first iteration.
pub fn sample_polynomial(start: f64, end: f64, step: f64) -> Result<PolynomialSamples> {
    if start > end {
        return Err(GeneratorError::new(format!(
            "range start {start} must not exceed end {end}"
        )));
    }
    if step <= 0.0 {
        return Err(GeneratorError::new(format!(
            "step must be positive, got {step}"
        )));
    }
    Ok(PolynomialSamples { x: start, end, step })
}

/// Lazy iterator over polynomial samples. Created by [`sample_polynomial`].
#[derive(Debug)]
pub struct PolynomialSamples {
    x: f64,
    end: f64,
    step: f64,
}

impl Iterator for PolynomialSamples {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        // half a step of slack so the inclusive endpoint survives
        // accumulated float drift
        if self.x > self.end + self.step / 2.0 {
            return None;
        }
        let y = polynomial(self.x);
        self.x += self.step;
        Some(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn samples_endpoints_inclusively() {
        let values: Vec<f64> = sample_polynomial(0.0, 1.0, 1.0).unwrap().collect();
        assert_eq!(values.len(), 2);
        assert_close(values[0], -2.0);
        assert_close(values[1], 3.1);
    }

    #[test]
    fn samples_known_values() {
        let values: Vec<f64> = sample_polynomial(1.0, 3.0, 1.0).unwrap().collect();
        assert_eq!(values.len(), 3);
        assert_close(values[0], 3.1); // f(1) = 0.1 + 5 - 2
        assert_close(values[1], 8.4); // f(2) = 0.4 + 10 - 2
        assert_close(values[2], 13.9); // f(3) = 0.9 + 15 - 2
    }

    #[test]
    fn endpoint_survives_float_drift() {
        // 0.1 is not exact in binary; the half-step slack must still
        // admit x = 1.0
        let values: Vec<f64> = sample_polynomial(0.0, 1.0, 0.1).unwrap().collect();
        assert_eq!(values.len(), 11);
    }

    #[test]
    fn rejects_reversed_range() {
        let err = sample_polynomial(5.0, 0.0, 1.0).unwrap_err();
        assert!(err.message().contains("must not exceed"));
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(sample_polynomial(0.0, 5.0, 0.0).is_err());
        assert!(sample_polynomial(0.0, 5.0, -1.0).is_err());
    }
}
