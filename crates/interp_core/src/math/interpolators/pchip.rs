//! One-shot interpolation entry points.

use super::hermite::evaluate_hermite;
use super::slopes::{estimate_slopes, SlopeMethod};
use crate::types::InterpolationError;
use num_traits::Float;

/// Monotone piecewise cubic Hermite interpolation in a single call.
///
/// Equivalent to [`estimate_slopes`] with [`SlopeMethod::Secant`] and the
/// monotonicity correction, followed by [`evaluate_hermite`].
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::pchip;
///
/// let xs: Vec<f64> = (0..30).map(|i| i as f64 * 0.1).collect();
/// let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
///
/// let v = pchip(&xs, &ys, &[0.05]).unwrap();
/// assert!(v[0] > 0.0 && v[0] < 0.1_f64.sin());
/// ```
pub fn pchip<T: Float>(xs: &[T], ys: &[T], queries: &[T]) -> Result<Vec<T>, InterpolationError> {
    let slopes = estimate_slopes(xs, ys, SlopeMethod::Secant, T::zero(), true)?;
    evaluate_hermite(xs, ys, &slopes, queries)
}

/// Catmull-Rom cubic Hermite spline in a single call, without the
/// monotonicity correction. Smoother than [`pchip`] but may overshoot.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::cubic_hermite_spline;
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 0.0, 1.0, 1.0];
///
/// // Overshoots below zero next to the flat run
/// let v = cubic_hermite_spline(&xs, &ys, &[0.5]).unwrap();
/// assert!(v[0] < 0.0);
/// ```
pub fn cubic_hermite_spline<T: Float>(
    xs: &[T],
    ys: &[T],
    queries: &[T],
) -> Result<Vec<T>, InterpolationError> {
    let slopes = estimate_slopes(xs, ys, SlopeMethod::CatmullRom, T::zero(), false)?;
    evaluate_hermite(xs, ys, &slopes, queries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::interpolators::{Interpolator, MonotoneCubicInterpolator};
    use approx::assert_relative_eq;

    #[test]
    fn test_pchip_matches_interpolator() {
        let xs = [0.0, 0.4, 1.0, 2.5, 3.0];
        let ys = [1.0, 3.0, 3.0, 2.0, -1.0];
        let qs = [-0.5, 0.2, 0.7, 1.9, 3.0, 3.4];

        let direct = pchip(&xs, &ys, &qs).unwrap();
        let interp = MonotoneCubicInterpolator::new(&xs, &ys).unwrap();
        assert_eq!(direct, interp.interpolate_many(&qs).unwrap());
    }

    #[test]
    fn test_pchip_propagates_domain_error() {
        let result = pchip(&[0.0, 1.0, 0.5], &[0.0, 1.0, 2.0], &[0.2]);
        assert!(matches!(
            result,
            Err(InterpolationError::UnsortedAbscissae { index: 2 })
        ));
    }

    #[test]
    fn test_pchip_empty_queries() {
        let v: Vec<f64> = pchip(&[0.0, 1.0], &[0.0, 1.0], &[]).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_cubic_hermite_spline_overshoots() {
        // Central difference at x=1 is 0.5 with no correction
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 0.0, 1.0, 1.0];
        let v = cubic_hermite_spline(&xs, &ys, &[0.5]).unwrap();
        // p(0.5) = h11(0.5) * 0.5 = -0.125 * 0.5
        assert_relative_eq!(v[0], -0.0625, epsilon = 1e-12);

        let v = pchip(&xs, &ys, &[0.5]).unwrap();
        assert_eq!(v[0], 0.0);
    }

    #[test]
    fn test_cubic_hermite_spline_pass_through() {
        let xs = [0.0, 0.5, 1.7, 2.0];
        let ys = [3.0, -1.0, 4.0, 4.5];
        let v = cubic_hermite_spline(&xs, &ys, &xs).unwrap();
        assert_eq!(v, ys.to_vec());
    }
}
