//! Sample domain validation and query classification.

use crate::types::InterpolationError;
use num_traits::Float;
use tracing::{debug, warn};

/// Outcome of a successful domain check.
///
/// Counts the queries that fall outside the sample domain. Such queries are
/// still evaluated (extrapolation) but carry no shape-preservation guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DomainReport {
    /// Number of queries strictly below the first abscissa
    pub below: usize,
    /// Number of queries strictly above the last abscissa
    pub above: usize,
}

impl DomainReport {
    /// Returns true if any query lies outside the sample domain.
    #[inline]
    pub fn is_extrapolating(&self) -> bool {
        self.below + self.above > 0
    }

    /// Number of queries outside the sample domain.
    #[inline]
    pub fn extrapolated(&self) -> usize {
        self.below + self.above
    }
}

/// Check that sample abscissae are usable for interpolation.
///
/// Requires at least two points, ascending order over the whole sequence,
/// and then no repeated values. NaN abscissae are reported as unsorted.
///
/// # Errors
///
/// * `InsufficientData` - fewer than 2 abscissae
/// * `UnsortedAbscissae` - an inversion (reported before any duplicate)
/// * `DuplicateAbscissa` - a value equal to its predecessor
pub fn validate_abscissae<T: Float>(xs: &[T]) -> Result<(), InterpolationError> {
    if xs.len() < 2 {
        warn!(points = xs.len(), "x values rejected: need at least 2 points");
        return Err(InterpolationError::InsufficientData {
            got: xs.len(),
            need: 2,
        });
    }

    let inverted = |i: usize| xs[i] < xs[i - 1] || xs[i].is_nan() || xs[i - 1].is_nan();
    if let Some(index) = (1..xs.len()).find(|&i| inverted(i)) {
        warn!(index, "x values weren't in sorted order, aborting");
        return Err(InterpolationError::UnsortedAbscissae { index });
    }

    if let Some(index) = (1..xs.len()).find(|&i| xs[i] == xs[i - 1]) {
        let x = xs[index].to_f64().unwrap_or(f64::NAN);
        warn!(index, x, "x values weren't strictly increasing, aborting");
        return Err(InterpolationError::DuplicateAbscissa { index, x });
    }

    Ok(())
}

/// Validate the sample domain and classify the query points.
///
/// The abscissae must pass [`validate_abscissae`]. Queries outside
/// `[xs[0], xs[n-1]]` are counted in the returned [`DomainReport`] but never
/// rejected, so callers may extrapolate.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::validate_domain;
///
/// let xs = [0.0, 1.0, 2.0];
///
/// let report = validate_domain(&xs, &[-1.0, 0.5, 3.0]).unwrap();
/// assert_eq!((report.below, report.above), (1, 1));
///
/// assert!(validate_domain(&[0.0, 2.0, 1.0], &[0.5]).is_err());
/// assert!(validate_domain(&[0.0, 1.0, 1.0], &[0.5]).is_err());
/// ```
pub fn validate_domain<T: Float>(xs: &[T], queries: &[T]) -> Result<DomainReport, InterpolationError> {
    validate_abscissae(xs)?;

    let x_min = xs[0];
    let x_max = xs[xs.len() - 1];

    let report = queries
        .iter()
        .fold(DomainReport::default(), |mut report, &q| {
            if q < x_min {
                report.below += 1;
            } else if q > x_max {
                report.above += 1;
            }
            report
        });

    if report.is_extrapolating() {
        debug!(
            below = report.below,
            above = report.above,
            x_min = x_min.to_f64().unwrap_or(f64::NAN),
            x_max = x_max.to_f64().unwrap_or(f64::NAN),
            "queries outside sample domain will be extrapolated"
        );
    }

    Ok(report)
}

/// Boolean form of [`validate_domain`]: true when evaluation may proceed.
#[inline]
pub fn is_valid_domain<T: Float>(xs: &[T], queries: &[T]) -> bool {
    validate_domain(xs, queries).is_ok()
}
