//! Core traits for interpolation.

use crate::types::InterpolationError;
use num_traits::Float;
use std::str::FromStr;

/// Selector for one end of an interpolator's sample domain.
///
/// Parsed from the exact strings `"min"` and `"max"`; anything else yields
/// [`InterpolationError::UnknownBound`].
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::BoundSelector;
///
/// assert_eq!("min".parse::<BoundSelector>().unwrap(), BoundSelector::Min);
/// assert!("MAX ".parse::<BoundSelector>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSelector {
    /// Smallest sample abscissa
    Min,
    /// Largest sample abscissa
    Max,
}

impl BoundSelector {
    /// Return the selector string.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundSelector::Min => "min",
            BoundSelector::Max => "max",
        }
    }
}

impl FromStr for BoundSelector {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(BoundSelector::Min),
            "max" => Ok(BoundSelector::Max),
            other => Err(InterpolationError::UnknownBound(other.to_string())),
        }
    }
}

impl std::fmt::Display for BoundSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic trait for 1D interpolation.
///
/// Implementations provide evaluation over a set of sample points at
/// arbitrary query values. Queries outside [`domain`](Interpolator::domain)
/// are extrapolated unless an implementation documents otherwise; shape
/// guarantees only hold inside the domain.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Contract
///
/// - `interpolate(x)` returns the value at a single query
/// - `interpolate_many(xs)` returns one value per query, in order
/// - `domain()` returns `(x_min, x_max)` where `x_min < x_max`
/// - `x_bound(selector)` returns one end of the domain, or
///   `Err(UnknownBound)` for an unrecognised selector
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, MonotoneCubicInterpolator};
///
/// fn span<I: Interpolator<f64>>(interp: &I) -> f64 {
///     let (lo, hi) = interp.domain();
///     hi - lo
/// }
///
/// let interp = MonotoneCubicInterpolator::new(&[1.0, 2.0, 4.0], &[0.0, 1.0, 2.0]).unwrap();
/// assert_eq!(span(&interp), 3.0);
/// ```
pub trait Interpolator<T: Float> {
    /// Interpolate value at point `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Interpolate a batch of query points.
    ///
    /// The default implementation evaluates each query independently and
    /// stops at the first error.
    fn interpolate_many(&self, xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        xs.iter().map(|&x| self.interpolate(x)).collect()
    }

    /// Return the sample domain `(x_min, x_max)`.
    fn domain(&self) -> (T, T);

    /// Return the lower or upper end of the domain selected by name.
    ///
    /// # Errors
    ///
    /// `InterpolationError::UnknownBound` when `selector` is neither
    /// `"min"` nor `"max"`.
    fn x_bound(&self, selector: &str) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();
        Ok(match selector.parse::<BoundSelector>()? {
            BoundSelector::Min => x_min,
            BoundSelector::Max => x_max,
        })
    }
}
