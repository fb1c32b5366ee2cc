//! Ordinary least squares for a degree-1 polynomial
//!
//! Fits `y = intercept + slope * x` by minimizing the sum of squared
//! residuals. Sums are taken around the means, which keeps the normal
//! equations well conditioned when `x` sits far from the origin.

use crate::{CurveError, Result};

/// Slope and intercept of a fitted line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Fit a straight line through `(x[i], y[i])`
///
/// Requires at least two points and a non-constant `x`.
pub fn ordinary_least_squares(x: &[f64], y: &[f64]) -> Result<LineFit> {
    if x.len() != y.len() {
        return Err(CurveError::MismatchedInputs {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(CurveError::InsufficientData {
            required: 2,
            actual: x.len(),
        });
    }
    if x.iter().all(|&v| v == x[0]) {
        return Err(CurveError::SingularFit { points: x.len() });
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (sxx, sxy) = x
        .iter()
        .zip(y.iter())
        .fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
            let dx = xi - mean_x;
            (sxx + dx * dx, sxy + dx * (yi - mean_y))
        });

    if sxx <= 0.0 || !sxx.is_finite() {
        return Err(CurveError::SingularFit { points: x.len() });
    }

    let slope = sxy / sxx;
    Ok(LineFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| 2.5 * v - 1.0).collect();

        let line = ordinary_least_squares(&x, &y).unwrap();
        assert!((line.slope - 2.5).abs() < 1e-10);
        assert!((line.intercept + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_step_data() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![1.5, 1.5, 3.5, 3.5];

        let line = ordinary_least_squares(&x, &y).unwrap();
        assert!((line.slope - 0.8).abs() < 1e-10);
        assert!((line.intercept - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_two_points() {
        let line = ordinary_least_squares(&[1.0, 3.0], &[2.0, 6.0]).unwrap();
        assert!((line.slope - 2.0).abs() < 1e-10);
        assert!(line.intercept.abs() < 1e-10);
    }

    #[test]
    fn test_single_point_is_insufficient() {
        assert_eq!(
            ordinary_least_squares(&[1.0], &[1.0]),
            Err(CurveError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_constant_x_is_singular() {
        assert_eq!(
            ordinary_least_squares(&[0.7, 0.7, 0.7], &[1.0, 2.0, 3.0]),
            Err(CurveError::SingularFit { points: 3 })
        );
    }

    #[test]
    fn test_mismatched_lengths() {
        assert_eq!(
            ordinary_least_squares(&[1.0, 2.0], &[1.0]),
            Err(CurveError::MismatchedInputs { x_len: 2, y_len: 1 })
        );
    }

    #[test]
    fn test_far_from_origin_is_stable() {
        let x: Vec<f64> = (0..50).map(|i| 1.0e6 + i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 0.5 * (v - 1.0e6) + 7.0).collect();

        let line = ordinary_least_squares(&x, &y).unwrap();
        assert!((line.slope - 0.5).abs() < 1e-9);
    }
}
