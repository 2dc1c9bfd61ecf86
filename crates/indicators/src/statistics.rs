//! Statistics primitives over finite windows.
//!
//! These never filter non-finite values: a NaN anywhere in the input poisons
//! the result, matching the window semantics of every calculator built on
//! top of them. Callers filter before plotting.

/// Sum of all values.
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean. An empty slice yields NaN.
#[must_use]
pub fn average(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

/// Mean of a fixed set of scalars, e.g. `average_of([high, low, close])`.
#[must_use]
pub fn average_of<const N: usize>(values: [f64; N]) -> f64 {
    average(&values)
}

/// Smallest value. An empty slice yields `+inf`.
///
/// NaN propagates instead of being skipped.
#[must_use]
pub fn minimum(values: &[f64]) -> f64 {
    values.iter().fold(f64::INFINITY, |acc, &v| {
        if v.is_nan() || acc.is_nan() {
            f64::NAN
        } else {
            acc.min(v)
        }
    })
}

/// Largest value. An empty slice yields `-inf`.
///
/// NaN propagates instead of being skipped.
#[must_use]
pub fn maximum(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |acc, &v| {
        if v.is_nan() || acc.is_nan() {
            f64::NAN
        } else {
            acc.max(v)
        }
    })
}

/// Population standard deviation (divides by N, not N-1).
#[must_use]
pub fn standard_deviation(values: &[f64]) -> f64 {
    let mean = average(values);
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Mean absolute deviation of `values` from `center`.
#[must_use]
pub fn mean_deviation(values: &[f64], center: f64) -> f64 {
    values.iter().map(|x| (x - center).abs()).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sum_and_average() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(sum(&values), 10.0);
        assert_relative_eq!(average(&values), 2.5);
        assert_relative_eq!(average_of([3.0, 6.0, 9.0]), 6.0);
        assert!(average(&[]).is_nan());
    }

    #[test]
    fn test_minimum_maximum() {
        let values = [3.0, -1.5, 7.25, 0.0];
        assert_relative_eq!(minimum(&values), -1.5);
        assert_relative_eq!(maximum(&values), 7.25);
        assert_eq!(minimum(&[]), f64::INFINITY);
        assert_eq!(maximum(&[]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_nan_poisons_extrema() {
        assert!(minimum(&[1.0, f64::NAN, 0.5]).is_nan());
        assert!(maximum(&[f64::NAN, 1.0]).is_nan());
    }

    #[test]
    fn test_standard_deviation_is_population() {
        // Population std of [1, 2, 3] = sqrt(2/3); the sample std would be 1.0
        assert_relative_eq!(
            standard_deviation(&[1.0, 2.0, 3.0]),
            (2.0_f64 / 3.0).sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(standard_deviation(&[5.0; 8]), 0.0);
    }

    #[test]
    fn test_mean_deviation() {
        // |1-2| + |2-2| + |3-2| = 2, / 3
        assert_relative_eq!(mean_deviation(&[1.0, 2.0, 3.0], 2.0), 2.0 / 3.0, epsilon = 1e-12);
    }
}
