//! Tangent estimation for cubic Hermite interpolation.
//!
//! Slopes are computed once per sample set and reused for every evaluation,
//! which is cheaper than re-deriving them per query when many points are
//! needed.
//!
//! # Methods
//!
//! | Method | Interior tangent |
//! |---|---|
//! | `Secant` | `(δ[k-1] + δ[k]) / 2` |
//! | `CatmullRom` | `(y[k+1] - y[k-1]) / (x[k+1] - x[k-1])` |
//! | `Cardinal` | `(1 - tension) * (y[k+1] - y[k-1]) / (x[k+1] - x[k-1])` |
//!
//! End tangents are the one-sided secants in every method.
//!
//! # Monotonicity
//!
//! With `monotone = true` the Fritsch-Carlson correction is applied: flat
//! intervals get zero tangents at both ends, and every other interval has its
//! normalised tangent pair `(α, β)` pulled back onto the disk of radius 3.

use super::domain::validate_abscissae;
use crate::types::InterpolationError;
use num_traits::Float;
use std::str::FromStr;

/// Interior tangent estimation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SlopeMethod {
    /// Average of the adjacent secants
    #[default]
    Secant,
    /// Central difference over the neighbouring points
    CatmullRom,
    /// Catmull-Rom damped by a tension factor
    Cardinal,
}

impl SlopeMethod {
    /// Return the canonical name of the method.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            SlopeMethod::Secant => "secant",
            SlopeMethod::CatmullRom => "catmull-rom",
            SlopeMethod::Cardinal => "cardinal",
        }
    }
}

impl FromStr for SlopeMethod {
    type Err = InterpolationError;

    /// Parse a method name by case-insensitive prefix.
    ///
    /// ```
    /// use interp_core::math::interpolators::SlopeMethod;
    ///
    /// assert_eq!("Secant".parse::<SlopeMethod>().unwrap(), SlopeMethod::Secant);
    /// assert_eq!("catmul".parse::<SlopeMethod>().unwrap(), SlopeMethod::CatmullRom);
    /// assert_eq!("Catmull-Rom".parse::<SlopeMethod>().unwrap(), SlopeMethod::CatmullRom);
    /// assert!("akima".parse::<SlopeMethod>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if name.starts_with("secant") {
            Ok(SlopeMethod::Secant)
        } else if name.starts_with("catmul") {
            Ok(SlopeMethod::CatmullRom)
        } else if name.starts_with("cardinal") {
            Ok(SlopeMethod::Cardinal)
        } else {
            Err(InterpolationError::InvalidInput(format!(
                "unknown slope method '{}': expected secant, catmull-rom or cardinal",
                s
            )))
        }
    }
}

impl std::fmt::Display for SlopeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimate the tangent at every sample point.
///
/// # Arguments
///
/// * `xs` - Strictly increasing abscissae (at least 2)
/// * `ys` - Ordinates, same length as `xs`; repeats allowed
/// * `method` - Interior tangent estimation method
/// * `tension` - Damping in `[0, 1]`, only used by [`SlopeMethod::Cardinal`]
/// * `monotone` - Apply the Fritsch-Carlson monotonicity correction
///
/// # Returns
///
/// * `Ok(slopes)` - One tangent per sample point
/// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or tension outside `[0, 1]`
/// * `Err(..)` - Any abscissa validation failure
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{estimate_slopes, SlopeMethod};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 0.0, 1.0, 1.0];
///
/// let m = estimate_slopes(&xs, &ys, SlopeMethod::Secant, 0.0, true).unwrap();
/// assert_eq!(m, vec![0.0, 0.0, 0.0, 0.0]);
///
/// let m = estimate_slopes(&xs, &ys, SlopeMethod::Secant, 0.0, false).unwrap();
/// assert_eq!(m, vec![0.0, 0.5, 0.5, 0.0]);
/// ```
pub fn estimate_slopes<T: Float>(
    xs: &[T],
    ys: &[T],
    method: SlopeMethod,
    tension: T,
    monotone: bool,
) -> Result<Vec<T>, InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs and ys must have same length: got {} and {}",
            xs.len(),
            ys.len()
        )));
    }
    if !(tension >= T::zero() && tension <= T::one()) {
        return Err(InterpolationError::InvalidInput(format!(
            "tension must lie in [0, 1]: got {}",
            tension.to_f64().unwrap_or(f64::NAN)
        )));
    }
    validate_abscissae(xs)?;

    let n = xs.len();
    let deltas = secants(xs, ys);

    let mut slopes = vec![T::zero(); n];
    slopes[0] = deltas[0];
    slopes[n - 1] = deltas[n - 2];

    let two = T::one() + T::one();
    for i in 1..n - 1 {
        slopes[i] = match method {
            SlopeMethod::Secant => (deltas[i - 1] + deltas[i]) / two,
            SlopeMethod::CatmullRom => central_difference(xs, ys, i),
            SlopeMethod::Cardinal => (T::one() - tension) * central_difference(xs, ys, i),
        };
    }

    if monotone {
        enforce_monotonicity(&deltas, &mut slopes);
    }

    Ok(slopes)
}

/// Secant slopes `δ[k] = (y[k+1] - y[k]) / (x[k+1] - x[k])`.
#[inline]
fn secants<T: Float>(xs: &[T], ys: &[T]) -> Vec<T> {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| (y[1] - y[0]) / (x[1] - x[0]))
        .collect()
}

#[inline]
fn central_difference<T: Float>(xs: &[T], ys: &[T], i: usize) -> T {
    (ys[i + 1] - ys[i - 1]) / (xs[i + 1] - xs[i - 1])
}

/// Fritsch-Carlson correction, in place.
///
/// Each rescale only shrinks tangents towards zero, so an interval already
/// inside the disk stays inside when its neighbour is corrected afterwards.
fn enforce_monotonicity<T: Float>(deltas: &[T], slopes: &mut [T]) {
    for (k, &delta) in deltas.iter().enumerate() {
        if delta == T::zero() {
            slopes[k] = T::zero();
            slopes[k + 1] = T::zero();
        }
    }

    let three = T::from(3.0).unwrap_or_else(|| T::one() + T::one() + T::one());
    let nine = three * three;

    for (k, &delta) in deltas.iter().enumerate() {
        if delta == T::zero() {
            continue;
        }
        let alpha = slopes[k] / delta;
        let beta = slopes[k + 1] / delta;
        let dist = alpha * alpha + beta * beta;
        if dist > nine {
            let tau = three / dist.sqrt();
            slopes[k] = tau * alpha * delta;
            slopes[k + 1] = tau * beta * delta;
        }
    }
}
