//! Price brackets (table values) and price ranges (rounded results).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Euros, ValidationError};

/// A `[min, max]` bracket as written in a price table, in euros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBracket {
    pub min: f64,
    pub max: f64,
}

impl PriceBracket {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Multiplies both bounds by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }

    /// Adds a flat `amount` to both bounds.
    pub fn shifted(&self, amount: f64) -> Self {
        Self::new(self.min + amount, self.max + amount)
    }

    /// Rounds to whole euros and clamps at zero. Ordering is preserved
    /// because both steps are monotone.
    pub fn to_range(&self) -> PriceRange {
        PriceRange {
            min: Euros::round(self.min).non_negative(),
            max: Euros::round(self.max).non_negative(),
        }
    }

    pub fn validate(&self, field: &str) -> Result<(), ValidationError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ValidationError::invalid_format(field, "bounds must be finite"));
        }
        if self.min > self.max {
            return Err(ValidationError::invalid_format(
                field,
                format!("min {} exceeds max {}", self.min, self.max),
            ));
        }
        Ok(())
    }
}

/// Final estimate shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Euros,
    pub max: Euros,
}

impl PriceRange {
    pub fn midpoint(&self) -> Euros {
        Euros::round((self.min.value() + self.max.value()) as f64 / 2.0)
    }
}

/// Validates that a multiplicative factor is positive and finite.
pub(crate) fn validate_factor(field: &str, factor: f64) -> Result<(), ValidationError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            field,
            format!("factor {} must be positive", factor),
        ))
    }
}
