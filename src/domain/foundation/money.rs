//! Whole-euro amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// An amount in whole euros. Estimates are always rounded to integer units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Euros(i64);

impl Euros {
    pub const ZERO: Self = Self(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Rounds a fractional amount to the nearest euro (half away from zero).
    pub fn round(value: f64) -> Self {
        if value.is_finite() {
            Self(value.round() as i64)
        } else {
            Self::ZERO
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Clamps negative amounts to zero.
    pub fn non_negative(self) -> Self {
        Self(self.0.max(0))
    }
}

impl Add for Euros {
    type Output = Euros;

    fn add(self, rhs: Euros) -> Euros {
        Euros(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Euros {
    type Output = Euros;

    fn sub(self, rhs: Euros) -> Euros {
        Euros(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Euros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} €", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_goes_half_away_from_zero() {
        assert_eq!(Euros::round(12.5).value(), 13);
        assert_eq!(Euros::round(-12.5).value(), -13);
        assert_eq!(Euros::round(12.49).value(), 12);
    }

    #[test]
    fn round_of_nan_is_zero() {
        assert_eq!(Euros::round(f64::NAN), Euros::ZERO);
    }

    #[test]
    fn non_negative_clamps() {
        assert_eq!(Euros::new(-40).non_negative(), Euros::ZERO);
        assert_eq!(Euros::new(40).non_negative().value(), 40);
    }

    #[test]
    fn displays_with_currency_sign() {
        assert_eq!(Euros::new(450).to_string(), "450 €");
    }
}
