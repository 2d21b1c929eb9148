//! Natural cubic spline over uniformly indexed samples
//!
//! Sample `i` sits at parameter `i`, so the knots are implicit and the
//! interval width is always one. The coefficient solve is the Thomas
//! algorithm on the tridiagonal continuity system, which the unit spacing
//! reduces to constant bands.

use crate::{Error, Result};

/// Pivots smaller than this abort the tridiagonal solve.
const MIN_PIVOT: f64 = 1e-14;

/// Piecewise cubic polynomial interpolating one scalar channel.
///
/// Natural boundary conditions (zero curvature at both ends). Evaluation
/// outside the domain clamps to the nearest endpoint.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    /// Sample values, doubling as the constant coefficient per interval.
    a: Vec<f64>,
    /// Linear coefficient per interval.
    b: Vec<f64>,
    /// Quadratic coefficient per knot.
    c: Vec<f64>,
    /// Cubic coefficient per interval.
    d: Vec<f64>,
}

impl CubicSpline {
    /// Fit a natural cubic spline through `samples`, sample `i` at
    /// parameter `i`.
    ///
    /// Needs at least two samples.
    pub fn fit(samples: &[f64]) -> Result<Self> {
        let n = samples.len();
        if n < 2 {
            return Err(Error::InsufficientSamples {
                required: 2,
                actual: n,
            });
        }

        let a = samples.to_vec();

        // Continuity system for the quadratic coefficients. Unit knot
        // spacing collapses the interval widths out of the classic
        // formulation: interior rows are [1 4 1], boundary rows pin the
        // end curvatures to zero.
        let mut lower = vec![0.0; n - 1];
        let mut diag = vec![1.0; n];
        let mut upper = vec![0.0; n - 1];
        let mut rhs = vec![0.0; n];

        for i in 1..n - 1 {
            lower[i - 1] = 1.0;
            diag[i] = 4.0;
            upper[i] = 1.0;
            rhs[i] = 3.0 * (samples[i + 1] - 2.0 * samples[i] + samples[i - 1]);
        }

        let c = solve_tridiagonal(&lower, &diag, &upper, &rhs)?;

        let mut b = vec![0.0; n - 1];
        let mut d = vec![0.0; n - 1];
        for i in 0..n - 1 {
            b[i] = (samples[i + 1] - samples[i]) - (2.0 * c[i] + c[i + 1]) / 3.0;
            d[i] = (c[i + 1] - c[i]) / 3.0;
        }

        Ok(Self { a, b, c, d })
    }

    /// Evaluate the spline at parameter `t`, clamped to the domain.
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, self.max_parameter());
        // The final knot belongs to the last interval.
        let i = (t as usize).min(self.b.len() - 1);
        let dt = t - i as f64;
        self.a[i] + dt * (self.b[i] + dt * (self.c[i] + dt * self.d[i]))
    }

    /// Number of samples the spline was fit through.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.a.len()
    }

    /// Upper end of the parameter domain (sample count minus one).
    #[inline]
    pub fn max_parameter(&self) -> f64 {
        (self.a.len() - 1) as f64
    }
}

/// Thomas algorithm for the spline continuity system.
///
/// `lower` and `upper` carry one element fewer than `diag`; the solution
/// lands in place of the forward-swept right-hand side.
fn solve_tridiagonal(lower: &[f64], diag: &[f64], upper: &[f64], rhs: &[f64]) -> Result<Vec<f64>> {
    let n = diag.len();
    let mut scratch = vec![0.0; n - 1];
    let mut solution = vec![0.0; n];

    scratch[0] = upper[0] / diag[0];
    solution[0] = rhs[0] / diag[0];

    for i in 1..n {
        let pivot = diag[i] - lower[i - 1] * scratch[i - 1];
        if pivot.abs() < MIN_PIVOT {
            return Err(Error::SingularSystem);
        }
        if i < n - 1 {
            scratch[i] = upper[i] / pivot;
        }
        solution[i] = (rhs[i] - lower[i - 1] * solution[i - 1]) / pivot;
    }

    for i in (0..n - 1).rev() {
        solution[i] -= scratch[i] * solution[i + 1];
    }

    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_requires_two_samples() {
        assert!(matches!(
            CubicSpline::fit(&[]),
            Err(Error::InsufficientSamples { actual: 0, .. })
        ));
        assert!(matches!(
            CubicSpline::fit(&[1.0]),
            Err(Error::InsufficientSamples { actual: 1, .. })
        ));
    }

    #[test]
    fn test_two_samples_interpolate_linearly() {
        let spline = CubicSpline::fit(&[0.0, 10.0]).unwrap();

        assert!((spline.evaluate(0.0) - 0.0).abs() < 1e-12);
        assert!((spline.evaluate(0.5) - 5.0).abs() < 1e-12);
        assert!((spline.evaluate(1.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_passes_through_knots() {
        let samples = [0.0, 1.0, 0.0, 1.0, -2.0];
        let spline = CubicSpline::fit(&samples).unwrap();

        for (i, &sample) in samples.iter().enumerate() {
            assert!(
                (spline.evaluate(i as f64) - sample).abs() < 1e-9,
                "knot {} off: {}",
                i,
                spline.evaluate(i as f64)
            );
        }
    }

    #[test]
    fn test_linear_data_stays_linear() {
        // Zero second differences force zero curvature everywhere, so the
        // spline reproduces a straight line exactly.
        let spline = CubicSpline::fit(&[0.0, 2.0, 4.0, 6.0, 8.0]).unwrap();

        assert!((spline.evaluate(1.5) - 3.0).abs() < 1e-12);
        assert!((spline.evaluate(3.25) - 6.5).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_clamps_out_of_domain() {
        let spline = CubicSpline::fit(&[1.0, 3.0, 2.0]).unwrap();

        assert!((spline.evaluate(-5.0) - spline.evaluate(0.0)).abs() < 1e-12);
        assert!((spline.evaluate(100.0) - spline.evaluate(2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_smooth_between_knots() {
        // The interpolant of an oscillating signal stays bounded by a
        // modest multiple of the sample range.
        let spline = CubicSpline::fit(&[0.0, 1.0, 0.0, 1.0, 0.0]).unwrap();

        let mut t = 0.0;
        while t <= 4.0 {
            let v = spline.evaluate(t);
            assert!(v.is_finite());
            assert!(v > -1.0 && v < 2.0, "runaway value {} at t={}", v, t);
            t += 0.01;
        }
    }

    #[test]
    fn test_accessors() {
        let spline = CubicSpline::fit(&[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(spline.sample_count(), 3);
        assert!((spline.max_parameter() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_tridiagonal_solver() {
        // Asymmetric 4x4 bands; the right-hand side is derived from the
        // solution [1, -1, 2, 0.5].
        let lower = vec![1.0, 2.0, 3.0];
        let diag = vec![4.0, 5.0, 6.0, 7.0];
        let upper = vec![2.0, 1.0, 2.0];
        let rhs = vec![2.0, -2.0, 11.0, 9.5];

        let x = solve_tridiagonal(&lower, &diag, &upper, &rhs).unwrap();

        let expected = [1.0, -1.0, 2.0, 0.5];
        for (i, &want) in expected.iter().enumerate() {
            assert!((x[i] - want).abs() < 1e-12, "x[{}] = {}", i, x[i]);
        }
    }

    #[test]
    fn test_tridiagonal_solver_rejects_collapsed_pivot() {
        // Row elimination zeroes the second pivot: [[1, 1], [1, 1]].
        let lower = vec![1.0];
        let diag = vec![1.0, 1.0];
        let upper = vec![1.0];
        let rhs = vec![1.0, 1.0];

        assert!(matches!(
            solve_tridiagonal(&lower, &diag, &upper, &rhs),
            Err(Error::SingularSystem)
        ));
    }
}
