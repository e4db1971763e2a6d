//! Swap tenor labels and tenor pairings for correlation fits.

use std::fmt;

/// A swap tenor in years, written with a `Y` suffix (`"10Y"`, `"2.5Y"`).
///
/// # Example
///
/// ```
/// use interp_models::TenorLabel;
///
/// assert_eq!(TenorLabel::from_years(5.0).as_str(), "5Y");
/// assert_eq!(TenorLabel::from_years(2.5).as_str(), "2.5Y");
/// assert_eq!(TenorLabel::new("10Y").years(), Some(10.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TenorLabel(String);

impl TenorLabel {
    /// Wrap an existing label verbatim.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Format a year count as a label.
    pub fn from_years(years: f64) -> Self {
        Self(format!("{}Y", years))
    }

    /// The label text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Year count, when the label has the `<number>Y` form.
    pub fn years(&self) -> Option<f64> {
        self.0
            .strip_suffix('Y')
            .or_else(|| self.0.strip_suffix('y'))
            .and_then(|n| n.trim().parse().ok())
    }
}

impl fmt::Display for TenorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenorLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Which argument slot of the correlation function holds the fixed tenor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FixedSlot {
    /// Fixed tenor first, sample tenor second
    First,
    /// Sample tenor first, fixed tenor second
    Second,
}

/// A fixed tenor and the slot it occupies; the sample abscissa supplies the
/// other tenor.
///
/// # Example
///
/// ```
/// use interp_models::TenorPairing;
///
/// let pairing = TenorPairing::fixed_first("10Y");
/// let (t1, t2) = pairing.labels(2.0);
/// assert_eq!((t1.as_str(), t2.as_str()), ("10Y", "2Y"));
///
/// let pairing = TenorPairing::fixed_second("10Y");
/// let (t1, t2) = pairing.labels(2.0);
/// assert_eq!((t1.as_str(), t2.as_str()), ("2Y", "10Y"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TenorPairing {
    /// The tenor held constant across samples
    pub fixed: TenorLabel,
    /// Where the fixed tenor goes
    pub slot: FixedSlot,
}

impl TenorPairing {
    /// Fixed tenor in the first slot.
    pub fn fixed_first(tenor: impl Into<TenorLabel>) -> Self {
        Self {
            fixed: tenor.into(),
            slot: FixedSlot::First,
        }
    }

    /// Fixed tenor in the second slot.
    pub fn fixed_second(tenor: impl Into<TenorLabel>) -> Self {
        Self {
            fixed: tenor.into(),
            slot: FixedSlot::Second,
        }
    }

    /// `(tenor1, tenor2)` for a sample at `x` years.
    pub fn labels(&self, x: f64) -> (TenorLabel, TenorLabel) {
        let varying = TenorLabel::from_years(x);
        match self.slot {
            FixedSlot::First => (self.fixed.clone(), varying),
            FixedSlot::Second => (varying, self.fixed.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_years_formats() {
        assert_eq!(TenorLabel::from_years(1.0).to_string(), "1Y");
        assert_eq!(TenorLabel::from_years(30.0).to_string(), "30Y");
        assert_eq!(TenorLabel::from_years(0.25).to_string(), "0.25Y");
    }

    #[test]
    fn test_years_parses() {
        assert_eq!(TenorLabel::new("7Y").years(), Some(7.0));
        assert_eq!(TenorLabel::new("1.5y").years(), Some(1.5));
        assert_eq!(TenorLabel::new("6M").years(), None);
        assert_eq!(TenorLabel::new("Y").years(), None);
    }

    #[test]
    fn test_pairing_slots() {
        let first = TenorPairing::fixed_first("5Y");
        assert_eq!(first.slot, FixedSlot::First);
        let (a, b) = first.labels(3.0);
        assert_eq!(a, TenorLabel::new("5Y"));
        assert_eq!(b, TenorLabel::new("3Y"));

        let second = TenorPairing::fixed_second(TenorLabel::from_years(5.0));
        let (a, b) = second.labels(3.0);
        assert_eq!(a.as_str(), "3Y");
        assert_eq!(b.as_str(), "5Y");
    }
}
