//! Decluttering (Entrümpelung) cost estimator.
//!
//! Volume estimate → base bracket → access and urgency factors → optional
//! service adjustments → rounded range.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::range::validate_factor;
use super::{PriceBracket, PriceRange};
use crate::domain::estimator::Estimator;
use crate::domain::foundation::{Euros, ValidationError};
use crate::domain::schema::BandTable;

/// A room type with its typical contents volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    pub label: String,
    pub volume_m3: f64,
}

/// Converts living space into additional volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeAdjustment {
    /// Smallest value the square-metre input accepts.
    pub min_square_meters: f64,
    pub max_square_meters: f64,
    pub cubic_meters_per_square_meter: f64,
}

impl SizeAdjustment {
    /// Clamps `square_meters` to the input range; NaN becomes the floor.
    pub fn clamp(&self, square_meters: f64) -> f64 {
        if square_meters.is_nan() {
            return self.min_square_meters;
        }
        square_meters.clamp(self.min_square_meters, self.max_square_meters)
    }

    pub fn term(&self, square_meters: f64) -> f64 {
        self.clamp(square_meters) * self.cubic_meters_per_square_meter
    }
}

/// A named multiplicative factor (access difficulty, urgency).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFactor {
    pub id: String,
    pub label: String,
    pub factor: f64,
}

/// An optional service adding (or, for value offsets, subtracting) money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraService {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub delta: PriceBracket,
}

/// Static tables of the decluttering calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclutteringTable {
    pub title: String,
    pub rooms: Vec<RoomType>,
    pub size: SizeAdjustment,
    pub buckets: BandTable<PriceBracket>,
    /// First entry is the default when no or an unknown option is chosen.
    pub access: Vec<PriceFactor>,
    /// First entry is the default ("no urgency").
    pub urgency: Vec<PriceFactor>,
    #[serde(default)]
    pub extras: Vec<ExtraService>,
}

impl DeclutteringTable {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (i, room) in self.rooms.iter().enumerate() {
            if self.rooms[..i].iter().any(|r| r.id == room.id) {
                return Err(ValidationError::invalid_format(
                    "rooms",
                    format!("duplicate room '{}'", room.id),
                ));
            }
            if !room.volume_m3.is_finite() || room.volume_m3 < 0.0 {
                return Err(ValidationError::invalid_format(
                    format!("rooms.{}.volume_m3", room.id),
                    "volume must be a non-negative number",
                ));
            }
        }
        let size = &self.size;
        if !(size.min_square_meters >= 0.0 && size.min_square_meters <= size.max_square_meters) {
            return Err(ValidationError::invalid_format(
                "size",
                "min_square_meters must be between 0 and max_square_meters",
            ));
        }
        if !(size.cubic_meters_per_square_meter.is_finite()
            && size.cubic_meters_per_square_meter >= 0.0)
        {
            return Err(ValidationError::invalid_format(
                "size.cubic_meters_per_square_meter",
                "must be a non-negative number",
            ));
        }
        for band in self.buckets.bands() {
            band.value.validate("buckets")?;
        }
        for (field, factors) in [("access", &self.access), ("urgency", &self.urgency)] {
            if factors.is_empty() {
                return Err(ValidationError::empty_field(field));
            }
            for f in factors {
                validate_factor(&format!("{}.{}", field, f.id), f.factor)?;
            }
        }
        for extra in &self.extras {
            extra.delta.validate(&format!("extras.{}", extra.id))?;
        }
        Ok(())
    }

    /// Factor for `id`; unknown or missing ids use the first entry.
    fn factor(factors: &[PriceFactor], id: Option<&str>) -> f64 {
        id.and_then(|id| factors.iter().find(|f| f.id == id))
            .or_else(|| factors.first())
            .map_or(1.0, |f| f.factor)
    }
}

/// User selections for the decluttering calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclutteringInput {
    /// Room type id → number of such rooms.
    #[serde(default)]
    pub rooms: BTreeMap<String, u32>,
    #[serde(default)]
    pub square_meters: f64,
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub extras: Vec<String>,
}

/// Estimate with its intermediate quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclutteringEstimate {
    pub volume_m3: f64,
    pub size_term_m3: f64,
    pub base: PriceBracket,
    pub access_factor: f64,
    pub urgency_factor: f64,
    pub extras_total: Euros,
    pub range: PriceRange,
}

/// Price-range estimator for decluttering jobs.
#[derive(Debug, Clone, Copy)]
pub struct DeclutteringEstimator<'t> {
    table: &'t DeclutteringTable,
}

impl<'t> DeclutteringEstimator<'t> {
    pub fn new(table: &'t DeclutteringTable) -> Self {
        Self { table }
    }

    /// Σ(room count × room volume) + size-derived term. Unknown rooms are ignored.
    pub fn volume(&self, input: &DeclutteringInput) -> f64 {
        let rooms: f64 = input
            .rooms
            .iter()
            .filter_map(|(id, count)| {
                self.table
                    .rooms
                    .iter()
                    .find(|r| &r.id == id)
                    .map(|r| r.volume_m3 * f64::from(*count))
            })
            .sum();
        rooms + self.table.size.term(input.square_meters)
    }

    /// Sum of the midpoints of every distinct, known extra service.
    fn extras_total(&self, input: &DeclutteringInput) -> f64 {
        self.table
            .extras
            .iter()
            .filter(|e| input.extras.iter().any(|id| *id == e.id))
            .map(|e| e.delta.midpoint())
            .sum()
    }
}

impl Estimator for DeclutteringEstimator<'_> {
    type Input = DeclutteringInput;
    type Output = DeclutteringEstimate;

    fn estimate(&self, input: &DeclutteringInput) -> DeclutteringEstimate {
        let volume = self.volume(input);
        let base = *self.table.buckets.resolve(volume);
        let access = DeclutteringTable::factor(&self.table.access, input.access.as_deref());
        let urgency = DeclutteringTable::factor(&self.table.urgency, input.urgency.as_deref());
        let extras = self.extras_total(input);

        let range = base
            .scaled(access)
            .scaled(urgency)
            .shifted(extras)
            .to_range();

        DeclutteringEstimate {
            volume_m3: volume,
            size_term_m3: self.table.size.term(input.square_meters),
            base,
            access_factor: access,
            urgency_factor: urgency,
            extras_total: Euros::round(extras),
            range,
        }
    }
}
