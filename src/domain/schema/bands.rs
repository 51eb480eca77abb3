//! Banded lookup tables keyed by a scalar (volume, area, snow depth).
//!
//! Bands are ordered by ascending upper bound. A value resolves to the first
//! band whose upper bound is strictly greater than the value; the final band
//! has no upper bound and catches everything larger.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A single band: applies to values below `upper`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
    pub value: T,
}

/// Validated, ascending list of bands ending in a catch-all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Band<T>>", into = "Vec<Band<T>>")]
#[serde(bound(
    serialize = "T: Serialize + Clone",
    deserialize = "T: Deserialize<'de>"
))]
pub struct BandTable<T>(Vec<Band<T>>);

impl<T> BandTable<T> {
    pub fn new(bands: Vec<Band<T>>) -> Result<Self, ValidationError> {
        let Some((last, bounded)) = bands.split_last() else {
            return Err(ValidationError::empty_field("bands"));
        };
        if last.upper.is_some() {
            return Err(ValidationError::invalid_format(
                "bands",
                "last band must not have an upper bound",
            ));
        }
        let mut previous = f64::NEG_INFINITY;
        for band in bounded {
            match band.upper {
                Some(upper) if upper.is_finite() && upper > previous => previous = upper,
                Some(upper) => {
                    return Err(ValidationError::invalid_format(
                        "bands",
                        format!("upper bound {} is not strictly ascending", upper),
                    ))
                }
                None => {
                    return Err(ValidationError::invalid_format(
                        "bands",
                        "only the last band may omit its upper bound",
                    ))
                }
            }
        }
        Ok(Self(bands))
    }

    /// Resolves `value` to the first band with `upper > value`.
    ///
    /// NaN resolves to the first band.
    pub fn resolve(&self, value: f64) -> &T {
        if value.is_nan() {
            return &self.0[0].value;
        }
        self.0
            .iter()
            .find(|band| band.upper.map_or(true, |upper| upper > value))
            .map(|band| &band.value)
            .unwrap_or_else(|| &self.0[self.0.len() - 1].value)
    }

    /// Returns the first band's value.
    pub fn first(&self) -> &T {
        &self.0[0].value
    }

    pub fn bands(&self) -> &[Band<T>] {
        &self.0
    }

    /// Upper bounds of all bounded bands, ascending.
    pub fn boundaries(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().filter_map(|band| band.upper)
    }
}

impl<T> TryFrom<Vec<Band<T>>> for BandTable<T> {
    type Error = ValidationError;

    fn try_from(bands: Vec<Band<T>>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl<T> From<BandTable<T>> for Vec<Band<T>> {
    fn from(table: BandTable<T>) -> Self {
        table.0
    }
}
