//! Piecewise cubic Hermite evaluation.
//!
//! Given knots `(x_k, y_k)` and tangents `m_k`, the segment `[x_k, x_{k+1}]`
//! is the cubic
//!
//! ```text
//! p(t) = h00(t)·y_k + h10(t)·h·m_k + h01(t)·y_{k+1} + h11(t)·h·m_{k+1}
//! ```
//!
//! with `h = x_{k+1} - x_k` and `t = (q - x_k) / h`. Queries outside the
//! sample domain continue the first or last segment cubic.

use super::domain::validate_domain;
use crate::types::InterpolationError;
use num_traits::Float;

/// Locate the segment for a query.
///
/// Returns `k` such that `xs[k] <= q < xs[k+1]`, clamped to `[0, n-2]`:
/// queries below the domain use the first segment and queries at or above
/// the last abscissa use the last one.
///
/// `xs` must hold at least two points.
///
/// ```
/// use interp_core::math::interpolators::bucket_index;
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// assert_eq!(bucket_index(&xs, -5.0), 0);
/// assert_eq!(bucket_index(&xs, 1.0), 1);
/// assert_eq!(bucket_index(&xs, 1.5), 1);
/// assert_eq!(bucket_index(&xs, 3.0), 2);
/// assert_eq!(bucket_index(&xs, 7.0), 2);
/// ```
#[inline]
pub fn bucket_index<T: Float>(xs: &[T], q: T) -> usize {
    let last = xs.len().saturating_sub(2);
    xs.partition_point(|&xi| xi <= q)
        .saturating_sub(1)
        .min(last)
}

/// Hermite basis at `t`: `(h00, h10, h01, h11)`.
#[inline]
fn basis<T: Float>(t: T) -> (T, T, T, T) {
    let two = T::one() + T::one();
    let three = two + T::one();
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = two * t3 - three * t2 + T::one();
    let h10 = t3 - two * t2 + t;
    let h01 = three * t2 - two * t3;
    let h11 = t3 - t2;
    (h00, h10, h01, h11)
}

/// Evaluate one query against samples already validated by the caller.
#[inline]
pub(crate) fn evaluate_validated<T: Float>(xs: &[T], ys: &[T], slopes: &[T], q: T) -> T {
    let k = bucket_index(xs, q);
    let h = xs[k + 1] - xs[k];
    let t = (q - xs[k]) / h;
    if t < T::zero() || t > T::one() {
        return extrapolate(ys[k], ys[k + 1], h * slopes[k], h * slopes[k + 1], t);
    }
    let (h00, h10, h01, h11) = basis(t);

    h00 * ys[k] + h10 * h * slopes[k] + h01 * ys[k + 1] + h11 * h * slopes[k + 1]
}

/// End cubic in nested power form. The basis form subtracts `t³` terms,
/// which turns into `inf - inf` once `t³` overflows.
#[inline]
fn extrapolate<T: Float>(y0: T, y1: T, d0: T, d1: T, t: T) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    let dy = y1 - y0;
    let c2 = three * dy - two * d0 - d1;
    let c3 = d0 + d1 - two * dy;

    y0 + t * (d0 + t * (c2 + t * c3))
}

fn check_lengths<T>(xs: &[T], ys: &[T], slopes: &[T]) -> Result<(), InterpolationError> {
    if xs.len() != ys.len() || xs.len() != slopes.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs, ys and slopes must have same length: got {}, {} and {}",
            xs.len(),
            ys.len(),
            slopes.len()
        )));
    }
    Ok(())
}

/// Evaluate the Hermite interpolant at a batch of queries.
///
/// The sample domain is validated first; queries outside it are
/// extrapolated by continuing the end cubic. Far enough out the cubic term
/// overflows and the result saturates to ±infinity. An empty query slice
/// yields an empty result.
///
/// # Arguments
///
/// * `xs` - Strictly increasing abscissae
/// * `ys` - Sample values
/// * `slopes` - Tangent at each sample
/// * `queries` - Points to evaluate, any order
///
/// # Returns
///
/// * `Ok(values)` - One value per query, in query order
/// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths
/// * `Err(..)` - Domain validation failure
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::evaluate_hermite;
///
/// // Straight line y = 2x with matching tangents
/// let xs = [0.0_f64, 1.0, 2.0];
/// let ys = [0.0, 2.0, 4.0];
/// let m = [2.0, 2.0, 2.0];
///
/// let values = evaluate_hermite(&xs, &ys, &m, &[0.5, 1.0, 3.0]).unwrap();
/// assert!((values[0] - 1.0).abs() < 1e-12);
/// assert_eq!(values[1], 2.0);
/// assert!((values[2] - 6.0).abs() < 1e-12);
/// ```
pub fn evaluate_hermite<T: Float>(
    xs: &[T],
    ys: &[T],
    slopes: &[T],
    queries: &[T],
) -> Result<Vec<T>, InterpolationError> {
    check_lengths(xs, ys, slopes)?;
    validate_domain(xs, queries)?;

    Ok(queries
        .iter()
        .map(|&q| evaluate_validated(xs, ys, slopes, q))
        .collect())
}

/// Scalar form of [`evaluate_hermite`].
pub fn evaluate_hermite_at<T: Float>(
    xs: &[T],
    ys: &[T],
    slopes: &[T],
    q: T,
) -> Result<T, InterpolationError> {
    check_lengths(xs, ys, slopes)?;
    validate_domain(xs, &[q])?;
    Ok(evaluate_validated(xs, ys, slopes, q))
}

/// Parallel form of [`evaluate_hermite`], splitting queries across the rayon
/// thread pool. Results are identical to the sequential path.
#[cfg(feature = "parallel")]
pub fn par_evaluate_hermite<T: Float + Send + Sync>(
    xs: &[T],
    ys: &[T],
    slopes: &[T],
    queries: &[T],
) -> Result<Vec<T>, InterpolationError> {
    use rayon::prelude::*;

    check_lengths(xs, ys, slopes)?;
    validate_domain(xs, queries)?;

    Ok(queries
        .par_iter()
        .map(|&q| evaluate_validated(xs, ys, slopes, q))
        .collect())
}
