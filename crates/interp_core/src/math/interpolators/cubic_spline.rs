//! Natural cubic spline interpolation.

use super::domain::validate_abscissae;
use super::hermite::bucket_index;
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;
use std::str::FromStr;

/// Behaviour of a spline for queries outside its sample domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SplineExtrapolation {
    /// Continue the first or last segment cubic
    #[default]
    Extrapolate,
    /// Return zero
    Zeros,
    /// Fail with [`InterpolationError::OutOfBounds`]
    Raise,
    /// Return the nearest boundary value
    Constant,
}

impl SplineExtrapolation {
    /// Return the canonical name of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            SplineExtrapolation::Extrapolate => "extrapolate",
            SplineExtrapolation::Zeros => "zeros",
            SplineExtrapolation::Raise => "raise",
            SplineExtrapolation::Constant => "constant",
        }
    }
}

impl FromStr for SplineExtrapolation {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "extrapolate" => Ok(SplineExtrapolation::Extrapolate),
            "zeros" => Ok(SplineExtrapolation::Zeros),
            "raise" => Ok(SplineExtrapolation::Raise),
            "constant" | "const" => Ok(SplineExtrapolation::Constant),
            _ => Err(InterpolationError::InvalidInput(format!(
                "unknown extrapolation policy '{}'",
                s
            ))),
        }
    }
}

impl std::fmt::Display for SplineExtrapolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polynomial coefficients for a cubic spline segment.
///
/// Represents a cubic polynomial: `y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³`
#[derive(Debug, Clone, Copy, PartialEq)]
struct SplineCoeffs<T: Float> {
    a: T,
    b: T,
    c: T,
    d: T,
}

impl<T: Float> SplineCoeffs<T> {
    #[inline]
    fn eval(&self, dx: T) -> T {
        self.a + dx * (self.b + dx * (self.c + dx * self.d))
    }
}

/// Natural cubic spline interpolator with C² continuity.
///
/// Zero second derivative at both ends. Unlike the monotone interpolator the
/// spline may overshoot between samples.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Abscissae must be strictly increasing; unsorted input is rejected rather
/// than reordered. At least 3 data points are required.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{
///     CubicSplineInterpolator, Interpolator, SplineExtrapolation,
/// };
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.interpolate(2.0).unwrap(), 4.0);
///
/// let clamped = interp.with_extrapolation(SplineExtrapolation::Constant);
/// assert_eq!(clamped.interpolate(10.0).unwrap(), 9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSplineInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    coeffs: Vec<SplineCoeffs<T>>,
    extrapolation: SplineExtrapolation,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Construct a natural cubic spline from x and y data points.
    ///
    /// # Arguments
    ///
    /// * `xs` - Strictly increasing x-coordinates
    /// * `ys` - Corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(CubicSplineInterpolator)` - Spline using [`SplineExtrapolation::Extrapolate`]
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 3 data points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    /// * `Err(..)` - Unsorted or repeated abscissae
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 3 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 3,
            });
        }
        validate_abscissae(xs)?;

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            coeffs: Self::compute_coefficients(xs, ys),
            extrapolation: SplineExtrapolation::default(),
        })
    }

    /// Replace the extrapolation policy.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: SplineExtrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Solve the tridiagonal system for the second derivatives at interior
    /// knots (Thomas algorithm), then build per-segment coefficients.
    fn compute_coefficients(xs: &[T], ys: &[T]) -> Vec<SplineCoeffs<T>> {
        let n = xs.len();
        let two = T::one() + T::one();
        let three = two + T::one();
        let six = two * three;

        let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        // Row i (interior knot i+1): h[i]·M[i] + 2(h[i]+h[i+1])·M[i+1] + h[i+1]·M[i+2] = r[i]
        let interior = n - 2;
        let mut c_prime = vec![T::zero(); interior];
        let mut d_prime = vec![T::zero(); interior];

        for i in 0..interior {
            let sub = h[i];
            let diag = two * (h[i] + h[i + 1]);
            let sup = h[i + 1];
            let rhs = six * ((ys[i + 2] - ys[i + 1]) / h[i + 1] - (ys[i + 1] - ys[i]) / h[i]);

            if i == 0 {
                c_prime[i] = sup / diag;
                d_prime[i] = rhs / diag;
            } else {
                let denom = diag - sub * c_prime[i - 1];
                c_prime[i] = sup / denom;
                d_prime[i] = (rhs - sub * d_prime[i - 1]) / denom;
            }
        }

        // Natural boundary: M[0] = M[n-1] = 0
        let mut m = vec![T::zero(); n];
        m[n - 2] = d_prime[interior - 1];
        for i in (0..interior - 1).rev() {
            m[i + 1] = d_prime[i] - c_prime[i] * m[i + 2];
        }

        (0..n - 1)
            .map(|i| SplineCoeffs {
                a: ys[i],
                b: (ys[i + 1] - ys[i]) / h[i] - h[i] * (two * m[i] + m[i + 1]) / six,
                c: m[i] / two,
                d: (m[i + 1] - m[i]) / (six * h[i]),
            })
            .collect()
    }

    /// Returns a reference to the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the extrapolation policy in use.
    #[inline]
    pub fn extrapolation(&self) -> SplineExtrapolation {
        self.extrapolation
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

    #[inline]
    fn eval_segment(&self, x: T) -> T {
        let i = bucket_index(&self.xs, x);
        // Right end of the last segment
        if x == self.xs[i + 1] {
            return self.ys[i + 1];
        }
        self.coeffs[i].eval(x - self.xs[i])
    }
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// Interpolate value at point `x` using cubic spline.
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated or extrapolated value
    /// * `Err(InterpolationError::OutOfBounds)` - `x` outside the domain under
    ///   [`SplineExtrapolation::Raise`]
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();
        if x >= x_min && x <= x_max {
            return Ok(self.eval_segment(x));
        }

        match self.extrapolation {
            SplineExtrapolation::Extrapolate => Ok(self.eval_segment(x)),
            SplineExtrapolation::Zeros => Ok(T::zero()),
            SplineExtrapolation::Constant if x < x_min => Ok(self.ys[0]),
            SplineExtrapolation::Constant => Ok(self.ys[self.ys.len() - 1]),
            SplineExtrapolation::Raise => Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            }),
        }
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

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_with_minimum_points() {
        let interp = CubicSplineInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert_eq!(interp.len(), 3);
        assert_eq!(interp.extrapolation(), SplineExtrapolation::Extrapolate);
    }

    #[test]
    fn test_new_insufficient_data_two_points() {
        let result = CubicSplineInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]);
        match result.unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 2);
                assert_eq!(need, 3);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_new_mismatched_lengths() {
        let result = CubicSplineInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]);
        match result.unwrap_err() {
            InterpolationError::InvalidInput(msg) => assert!(msg.contains("same length")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_new_rejects_unsorted_data() {
        let result = CubicSplineInterpolator::new(&[3.0, 1.0, 2.0, 0.0], &[9.0, 1.0, 4.0, 0.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::UnsortedAbscissae { index: 1 })
        ));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = CubicSplineInterpolator::new(&[0.0, 1.0, 1.0, 2.0], &[0.0, 1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::DuplicateAbscissa { .. })
        ));
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_reproduces_knots() {
        let xs = [0.0, 0.7, 1.0, 2.2, 3.0, 4.1];
        let ys = [1.0, -0.5, 2.0, 2.0, 0.0, 3.0];
        let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.interpolate(x).unwrap(), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_three_point_closed_form() {
        // Single interior knot: M1 = 3 * ((4-1) - (1-0)) / 2 = 3
        let interp = CubicSplineInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        // Segment 0: b = 1 - 3/6 = 0.5, c = 0, d = 0.5
        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 0.25 + 0.0625, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_data_is_exact() {
        let xs = [0.0, 1.0, 2.5, 3.0, 5.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x + 1.0).collect();
        let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        for q in [0.3, 1.7, 2.9, 4.4] {
            assert_relative_eq!(interp.interpolate(q).unwrap(), 2.0 * q + 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_continuity_at_knots() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 1.0, 0.0, 1.0, 0.0];
        let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();

        let eps = 1e-6;
        for &k in &xs[1..4] {
            let left = interp.interpolate(k - eps).unwrap();
            let right = interp.interpolate(k + eps).unwrap();
            assert!((left - right).abs() < 1e-5);
        }
    }

    // ========================================
    // Extrapolation Tests
    // ========================================

    fn spline() -> CubicSplineInterpolator<f64> {
        CubicSplineInterpolator::new(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 0.0, 5.0]).unwrap()
    }

    #[test]
    fn test_extrapolate_continues_end_segment() {
        let interp = spline();
        let beyond = interp.interpolate(3.5).unwrap();
        assert!(beyond.is_finite());
        assert_ne!(beyond, 5.0);
    }

    #[test]
    fn test_zeros_policy() {
        let interp = spline().with_extrapolation(SplineExtrapolation::Zeros);
        assert_eq!(interp.interpolate(-1.0).unwrap(), 0.0);
        assert_eq!(interp.interpolate(4.0).unwrap(), 0.0);
        assert_eq!(interp.interpolate(3.0).unwrap(), 5.0);
    }

    #[test]
    fn test_constant_policy() {
        let interp = spline().with_extrapolation(SplineExtrapolation::Constant);
        assert_eq!(interp.interpolate(-1.0).unwrap(), 1.0);
        assert_eq!(interp.interpolate(100.0).unwrap(), 5.0);
    }

    #[test]
    fn test_raise_policy() {
        let interp = spline().with_extrapolation(SplineExtrapolation::Raise);
        match interp.interpolate(3.5).unwrap_err() {
            InterpolationError::OutOfBounds { x, min, max } => {
                assert_eq!(x, 3.5);
                assert_eq!(min, 0.0);
                assert_eq!(max, 3.0);
            }
            _ => panic!("Expected OutOfBounds error"),
        }
        assert!(interp.interpolate(0.0).is_ok());
        assert!(interp.interpolate_many(&[1.0, -0.1]).is_err());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "Raise".parse::<SplineExtrapolation>().unwrap(),
            SplineExtrapolation::Raise
        );
        assert_eq!(
            "const".parse::<SplineExtrapolation>().unwrap(),
            SplineExtrapolation::Constant
        );
        assert!("nearest".parse::<SplineExtrapolation>().is_err());
    }

    #[test]
    fn test_domain_and_x_bound() {
        let interp = spline();
        assert_eq!(interp.domain(), (0.0, 3.0));
        assert_eq!(interp.x_bound("max").unwrap(), 3.0);
        assert!(interp.x_bound("middle").is_err());
    }
}
