#![warn(missing_docs)]

//! Numerical quadrature for the Möbius strip surface model.
//!
//! Two families of rules live here:
//!
//! - [`simpson`] and [`simpson_rows`] integrate *sampled* data with
//!   composite Simpson's rule over explicit abscissas. This is what the
//!   surface-area estimator uses on its parameter grid.
//! - [`adaptive_simpson`] integrates a closure by recursive bisection,
//!   used for reference quantities such as the exact edge arc length.

use nalgebra::DMatrix;
use thiserror::Error;
use tracing::trace;

/// Errors that can occur while integrating sampled data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrateError {
    /// Sample values and abscissas have different lengths.
    #[error("sample count mismatch: {values} values but {abscissas} abscissas")]
    LengthMismatch {
        /// Number of sample values.
        values: usize,
        /// Number of abscissas.
        abscissas: usize,
    },

    /// Two consecutive abscissas coincide, so an interval has zero width.
    #[error("zero-width interval between abscissas {index} and {}", index + 1)]
    DegenerateInterval {
        /// Index of the first abscissa of the degenerate interval.
        index: usize,
    },
}

/// Integrate samples `y` taken at abscissas `x` with composite Simpson's rule.
///
/// Abscissas may be non-uniform. With an even number of samples (odd number
/// of intervals) the last interval is integrated with a quadratic through
/// the final three samples. Two samples fall back to the trapezoid rule;
/// fewer than two integrate to zero.
pub fn simpson(y: &[f64], x: &[f64]) -> Result<f64, IntegrateError> {
    if y.len() != x.len() {
        return Err(IntegrateError::LengthMismatch {
            values: y.len(),
            abscissas: x.len(),
        });
    }
    let steps = interval_widths(x)?;
    let n = y.len();

    match n {
        0 | 1 => Ok(0.0),
        2 => Ok(0.5 * steps[0] * (y[0] + y[1])),
        _ if n % 2 == 1 => Ok(simpson_pairs(y, &steps, n - 1)),
        _ => {
            // All but the last interval, then the trailing interval.
            let head = simpson_pairs(y, &steps, n - 2);
            let h0 = steps[n - 3];
            let h1 = steps[n - 2];
            let alpha = (2.0 * h1 * h1 + 3.0 * h0 * h1) / (6.0 * (h0 + h1));
            let beta = (h1 * h1 + 3.0 * h0 * h1) / (6.0 * h0);
            let eta = h1 * h1 * h1 / (6.0 * h0 * (h0 + h1));
            Ok(head + alpha * y[n - 1] + beta * y[n - 2] - eta * y[n - 3])
        }
    }
}

/// Integrate each column of `values` over its rows with [`simpson`].
///
/// Row `i` of the matrix is the sample taken at abscissa `x[i]`; the result
/// holds one integral per column.
pub fn simpson_rows(values: &DMatrix<f64>, x: &[f64]) -> Result<Vec<f64>, IntegrateError> {
    if values.nrows() != x.len() {
        return Err(IntegrateError::LengthMismatch {
            values: values.nrows(),
            abscissas: x.len(),
        });
    }

    let mut profile = Vec::with_capacity(values.ncols());
    let mut column = Vec::with_capacity(values.nrows());
    for col in values.column_iter() {
        column.clear();
        column.extend(col.iter().copied());
        profile.push(simpson(&column, x)?);
    }

    trace!(
        rows = values.nrows(),
        cols = values.ncols(),
        "integrated matrix columns"
    );
    Ok(profile)
}

/// Integrate `f` over `[a, b]` with adaptive Simpson's rule.
///
/// Subdivides until the Richardson error estimate drops below `tolerance`
/// or `max_depth` levels of bisection are reached.
pub fn adaptive_simpson<F>(f: F, a: f64, b: f64, tolerance: f64, max_depth: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    fn simpson_step<F: Fn(f64) -> f64>(f: &F, a: f64, fa: f64, b: f64, fb: f64) -> (f64, f64, f64) {
        let m = 0.5 * (a + b);
        let fm = f(m);
        (m, fm, (b - a) / 6.0 * (fa + 4.0 * fm + fb))
    }

    #[allow(clippy::too_many_arguments)]
    fn helper<F: Fn(f64) -> f64>(
        f: &F,
        a: f64,
        fa: f64,
        b: f64,
        fb: f64,
        m: f64,
        fm: f64,
        whole: f64,
        tolerance: f64,
        depth: usize,
    ) -> f64 {
        let (lm, flm, left) = simpson_step(f, a, fa, m, fm);
        let (rm, frm, right) = simpson_step(f, m, fm, b, fb);
        let combined = left + right;
        let delta = combined - whole;

        if depth == 0 || delta.abs() <= 15.0 * tolerance {
            combined + delta / 15.0
        } else {
            let half = tolerance / 2.0;
            helper(f, a, fa, m, fm, lm, flm, left, half, depth - 1)
                + helper(f, m, fm, b, fb, rm, frm, right, half, depth - 1)
        }
    }

    if a == b {
        return 0.0;
    }
    let fa = f(a);
    let fb = f(b);
    let (m, fm, whole) = simpson_step(&f, a, fa, b, fb);
    helper(&f, a, fa, b, fb, m, fm, whole, tolerance, max_depth)
}

/// Sum Simpson panels over intervals `[0, intervals)`; `intervals` is even.
fn simpson_pairs(y: &[f64], steps: &[f64], intervals: usize) -> f64 {
    (0..intervals)
        .step_by(2)
        .map(|i| {
            let h0 = steps[i];
            let h1 = steps[i + 1];
            let hs = h0 + h1;
            hs / 6.0
                * ((2.0 - h1 / h0) * y[i] + hs * hs / (h0 * h1) * y[i + 1] + (2.0 - h0 / h1) * y[i + 2])
        })
        .sum()
}

fn interval_widths(x: &[f64]) -> Result<Vec<f64>, IntegrateError> {
    x.windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let h = pair[1] - pair[0];
            if h == 0.0 {
                Err(IntegrateError::DegenerateInterval { index })
            } else {
                Ok(h)
            }
        })
        .collect()
}
