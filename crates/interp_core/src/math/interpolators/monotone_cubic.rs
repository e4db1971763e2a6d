//! Monotonicity-preserving cubic Hermite interpolation (PCHIP).

use super::domain::validate_domain;
use super::hermite::evaluate_validated;
use super::slopes::{estimate_slopes, SlopeMethod};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;
use tracing::debug;

/// Fritsch-Carlson monotone cubic interpolator.
///
/// Owns its samples and the tangents derived from them. Secant tangents are
/// corrected so that monotone data yield a monotone interpolant without
/// overshoot, and flat runs stay exactly flat.
///
/// Queries outside the sample domain are extrapolated with the end segment
/// cubic.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, MonotoneCubicInterpolator};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys = [0.0, 0.0, 1.0, 1.0];
///
/// let mut interp = MonotoneCubicInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.interpolate(0.5).unwrap(), 0.0);
///
/// interp.update(&[0.0, 1.0, 2.0, 3.0]).unwrap();
/// assert!((interp.interpolate(1.5).unwrap() - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MonotoneCubicInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    slopes: Vec<T>,
}

impl<T: Float> MonotoneCubicInterpolator<T> {
    /// Construct from sample points.
    ///
    /// # Arguments
    ///
    /// * `xs` - Strictly increasing abscissae (at least 2)
    /// * `ys` - Sample values, same length as `xs`
    ///
    /// # Returns
    ///
    /// * `Ok(MonotoneCubicInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    /// * `Err(..)` - Domain validation failure
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let slopes = estimate_slopes(xs, ys, SlopeMethod::Secant, T::zero(), true)?;

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            slopes,
        })
    }

    /// Replace the sample values, keeping the abscissae.
    ///
    /// Tangents are recomputed before anything is replaced, so on error the
    /// interpolator is left unchanged.
    ///
    /// # Errors
    ///
    /// `InterpolationError::InvalidInput` when `ys` has a different length
    /// from the stored abscissae.
    pub fn update(&mut self, ys: &[T]) -> Result<(), InterpolationError> {
        if ys.len() != self.xs.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "update needs {} values, got {}",
                self.xs.len(),
                ys.len()
            )));
        }

        let slopes = estimate_slopes(&self.xs, ys, SlopeMethod::Secant, T::zero(), true)?;
        self.ys = ys.to_vec();
        self.slopes = slopes;

        debug!(points = self.xs.len(), "monotone cubic values updated");
        Ok(())
    }

    /// Returns the sample abscissae.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the sample values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the tangent at each sample.
    #[inline]
    pub fn slopes(&self) -> &[T] {
        &self.slopes
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for MonotoneCubicInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        validate_domain(&self.xs, &[x])?;
        Ok(evaluate_validated(&self.xs, &self.ys, &self.slopes, x))
    }

    /// Evaluate a batch with one domain check for the whole batch.
    fn interpolate_many(&self, xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        validate_domain(&self.xs, xs)?;
        Ok(xs
            .iter()
            .map(|&q| evaluate_validated(&self.xs, &self.ys, &self.slopes, q))
            .collect())
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn step_interp() -> MonotoneCubicInterpolator<f64> {
        let xs = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
        let ys = [-1.0, -1.0, -1.0, 0.0, 1.0, 1.0, 1.0];
        MonotoneCubicInterpolator::new(&xs, &ys).unwrap()
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_stores_samples() {
        let interp = MonotoneCubicInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert_eq!(interp.len(), 3);
        assert!(!interp.is_empty());
        assert_eq!(interp.xs(), &[0.0, 1.0, 2.0]);
        assert_eq!(interp.ys(), &[0.0, 1.0, 4.0]);
        assert_eq!(interp.slopes().len(), 3);
    }

    #[test]
    fn test_new_rejects_unsorted() {
        let result = MonotoneCubicInterpolator::new(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]);
        match result.unwrap_err() {
            InterpolationError::UnsortedAbscissae { index } => assert_eq!(index, 2),
            other => panic!("Expected UnsortedAbscissae, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = MonotoneCubicInterpolator::new(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::DuplicateAbscissa { index: 2, .. })
        ));
    }

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let result = MonotoneCubicInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_new_two_points_is_linear() {
        let interp = MonotoneCubicInterpolator::new(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 4.0, epsilon = 1e-12);
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_step_flat_runs_are_exact() {
        let interp = step_interp();
        for i in 0..=200 {
            let q = -3.0 + i as f64 * 0.01;
            assert_eq!(interp.interpolate(q).unwrap(), -1.0, "at x = {}", q);
        }
        for i in 0..=200 {
            let q = 1.0 + i as f64 * 0.01;
            assert_eq!(interp.interpolate(q).unwrap(), 1.0, "at x = {}", q);
        }
    }

    #[test]
    fn test_step_rise_is_monotone() {
        let interp = step_interp();
        let qs: Vec<f64> = (0..=200).map(|i| -1.0 + i as f64 * 0.01).collect();
        let values = interp.interpolate_many(&qs).unwrap();
        for w in values.windows(2) {
            assert!(w[1] >= w[0], "{} then {}", w[0], w[1]);
        }
        assert!(values.iter().all(|&v| (-1.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_extrapolation_permitted() {
        let interp = MonotoneCubicInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap();
        assert_relative_eq!(interp.interpolate(3.0).unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(-1.0).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_far_extrapolation_of_plateaus() {
        let interp = step_interp();
        assert_eq!(interp.interpolate(1e300).unwrap(), 1.0);
        assert_eq!(interp.interpolate(-1e300).unwrap(), -1.0);
    }

    #[test]
    fn test_interpolate_many_matches_scalar() {
        let interp = step_interp();
        let qs = [2.5, -2.5, 0.3, -0.7, 4.0];
        let batch = interp.interpolate_many(&qs).unwrap();
        for (q, v) in qs.iter().zip(batch.iter()) {
            assert_eq!(*v, interp.interpolate(*q).unwrap());
        }
    }

    #[test]
    fn test_interpolate_many_empty() {
        assert!(step_interp().interpolate_many(&[]).unwrap().is_empty());
    }

    // ========================================
    // Bounds Tests
    // ========================================

    #[test]
    fn test_domain_and_x_bound() {
        let interp = step_interp();
        assert_eq!(interp.domain(), (-3.0, 3.0));
        assert_eq!(interp.x_bound("min").unwrap(), -3.0);
        assert_eq!(interp.x_bound("max").unwrap(), 3.0);
    }

    #[test]
    fn test_x_bound_unknown_selector() {
        let result = step_interp().x_bound("err");
        assert_eq!(
            result,
            Err(InterpolationError::UnknownBound("err".to_string()))
        );
    }

    // ========================================
    // Update Tests
    // ========================================

    #[test]
    fn test_update_matches_fresh_construction() {
        let xs = [0.0, 0.5, 1.5, 3.0];
        let mut interp = MonotoneCubicInterpolator::new(&xs, &[0.0, 1.0, 2.0, 3.0]).unwrap();
        let ynew = [5.0, 5.0, 2.0, -1.0];
        interp.update(&ynew).unwrap();

        let fresh = MonotoneCubicInterpolator::new(&xs, &ynew).unwrap();
        assert_eq!(interp, fresh);
    }

    #[test]
    fn test_update_wrong_length_leaves_state() {
        let mut interp = step_interp();
        let before = interp.clone();
        let result = interp.update(&[0.0, 1.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
        assert_eq!(interp, before);
    }

    #[test]
    fn test_with_f32() {
        let interp =
            MonotoneCubicInterpolator::new(&[0.0_f32, 1.0, 2.0], &[0.0_f32, 1.0, 1.0]).unwrap();
        assert_eq!(interp.interpolate(1.5_f32).unwrap(), 1.0);
    }
}
