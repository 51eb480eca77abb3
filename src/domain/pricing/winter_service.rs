//! Winter-service cost comparison: do-it-yourself versus a contractor's
//! seasonal flat rate.

use serde::{Deserialize, Serialize};

use super::range::validate_factor;
use super::{PriceBracket, PriceRange};
use crate::domain::estimator::Estimator;
use crate::domain::foundation::{Euros, ValidationError};
use crate::domain::schema::BandTable;

/// Cost assumptions for clearing snow yourself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiyRates {
    /// Value of one hour of own labour, in euros.
    pub hourly_value: f64,
    pub grit_cost_per_square_meter: f64,
    pub equipment_cost_per_season: f64,
    /// Square metres cleared per hour, banded by snow depth in cm.
    pub clearing_rates: BandTable<f64>,
}

/// Contractor pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalRates {
    /// Clearings covered by the seasonal flat rate.
    pub included_clearings: u32,
    /// Seasonal flat rate, banded by area in m².
    pub seasonal_brackets: BandTable<PriceBracket>,
    /// Surcharge factor, banded by snow depth in cm.
    pub depth_factors: BandTable<f64>,
}

/// Upper limits accepted at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    pub max_area: f64,
    pub max_snow_depth: f64,
    pub max_frequency: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinterServiceTable {
    pub title: String,
    pub diy: DiyRates,
    pub professional: ProfessionalRates,
    pub limits: InputLimits,
}

impl WinterServiceTable {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let diy = &self.diy;
        for (field, value) in [
            ("diy.hourly_value", diy.hourly_value),
            ("diy.grit_cost_per_square_meter", diy.grit_cost_per_square_meter),
            ("diy.equipment_cost_per_season", diy.equipment_cost_per_season),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::invalid_format(
                    field,
                    "must be a non-negative number",
                ));
            }
        }
        for band in diy.clearing_rates.bands() {
            validate_factor("diy.clearing_rates", band.value)?;
        }
        if self.professional.included_clearings == 0 {
            return Err(ValidationError::out_of_range(
                "professional.included_clearings",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        for band in self.professional.seasonal_brackets.bands() {
            band.value.validate("professional.seasonal_brackets")?;
        }
        for band in self.professional.depth_factors.bands() {
            validate_factor("professional.depth_factors", band.value)?;
        }
        Ok(())
    }
}

/// Property and season parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WinterServiceInput {
    /// Area to keep clear, in m².
    pub area: f64,
    /// Typical snow depth per event, in cm.
    pub snow_depth: f64,
    /// Expected clearings per season.
    pub frequency: u32,
}

impl WinterServiceInput {
    /// Rejects negative, non-finite and over-limit values.
    pub fn validate(&self, limits: &InputLimits) -> Result<(), ValidationError> {
        check_bound("area", self.area, limits.max_area)?;
        check_bound("snowDepth", self.snow_depth, limits.max_snow_depth)?;
        if self.frequency > limits.max_frequency {
            return Err(ValidationError::out_of_range(
                "frequency",
                0,
                i64::from(limits.max_frequency),
                i64::from(self.frequency),
            ));
        }
        Ok(())
    }

    /// Negative and non-finite values become zero.
    fn sanitized(&self) -> Self {
        let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            area: clean(self.area),
            snow_depth: clean(self.snow_depth),
            frequency: self.frequency,
        }
    }
}

fn check_bound(field: &str, value: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid_format(field, "must be a finite number"));
    }
    if value < 0.0 || value > max {
        return Err(ValidationError::out_of_range(
            field,
            0,
            max as i64,
            value.round() as i64,
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiyCosts {
    pub hours_per_clearing: f64,
    pub total_hours: f64,
    pub labor_value: Euros,
    pub grit_cost: Euros,
    pub equipment_cost: Euros,
    pub total: Euros,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalCosts {
    pub range: PriceRange,
    pub midpoint: Euros,
    pub per_clearing: Euros,
    pub depth_factor: f64,
    pub frequency_factor: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinterServiceComparison {
    pub diy: DiyCosts,
    pub professional: ProfessionalCosts,
    /// Professional midpoint minus DIY total; positive means DIY is cheaper.
    pub cost_difference: Euros,
}

pub struct WinterServiceEstimator<'t> {
    table: &'t WinterServiceTable,
}

impl<'t> WinterServiceEstimator<'t> {
    pub fn new(table: &'t WinterServiceTable) -> Self {
        Self { table }
    }

    fn diy(&self, input: &WinterServiceInput) -> DiyCosts {
        if input.area == 0.0 || input.frequency == 0 {
            return DiyCosts::default();
        }
        let rates = &self.table.diy;
        let clearings = f64::from(input.frequency);
        let hours_per_clearing = input.area / *rates.clearing_rates.resolve(input.snow_depth);
        let total_hours = hours_per_clearing * clearings;
        let labor = total_hours * rates.hourly_value;
        let grit = input.area * rates.grit_cost_per_square_meter * clearings;
        let equipment = rates.equipment_cost_per_season;

        DiyCosts {
            hours_per_clearing,
            total_hours,
            labor_value: Euros::round(labor),
            grit_cost: Euros::round(grit),
            equipment_cost: Euros::round(equipment),
            total: Euros::round(labor + grit + equipment),
        }
    }

    fn professional(&self, input: &WinterServiceInput) -> ProfessionalCosts {
        if input.area == 0.0 {
            return ProfessionalCosts::default();
        }
        let rates = &self.table.professional;
        let depth_factor = *rates.depth_factors.resolve(input.snow_depth);
        let frequency_factor =
            (f64::from(input.frequency) / f64::from(rates.included_clearings.max(1))).max(1.0);
        let range = rates
            .seasonal_brackets
            .resolve(input.area)
            .scaled(depth_factor)
            .scaled(frequency_factor)
            .to_range();
        let midpoint = range.midpoint();
        let per_clearing = if input.frequency == 0 {
            Euros::ZERO
        } else {
            Euros::round(midpoint.value() as f64 / f64::from(input.frequency))
        };

        ProfessionalCosts {
            range,
            midpoint,
            per_clearing,
            depth_factor,
            frequency_factor,
        }
    }
}

impl Estimator for WinterServiceEstimator<'_> {
    type Input = WinterServiceInput;
    type Output = WinterServiceComparison;

    fn estimate(&self, input: &WinterServiceInput) -> WinterServiceComparison {
        let input = input.sanitized();
        let diy = self.diy(&input);
        let professional = self.professional(&input);
        WinterServiceComparison {
            diy,
            professional,
            cost_difference: professional.midpoint - diy.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::Band;

    fn bands<T>(bands: Vec<(Option<f64>, T)>) -> BandTable<T> {
        BandTable::new(
            bands
                .into_iter()
                .map(|(upper, value)| Band { upper, value })
                .collect(),
        )
        .unwrap()
    }

    fn table() -> WinterServiceTable {
        WinterServiceTable {
            title: "Winterdienst".to_string(),
            diy: DiyRates {
                hourly_value: 15.0,
                grit_cost_per_square_meter: 0.05,
                equipment_cost_per_season: 120.0,
                clearing_rates: bands(vec![(Some(5.0), 60.0), (Some(15.0), 40.0), (None, 25.0)]),
            },
            professional: ProfessionalRates {
                included_clearings: 20,
                seasonal_brackets: bands(vec![
                    (Some(100.0), PriceBracket::new(350.0, 550.0)),
                    (Some(250.0), PriceBracket::new(550.0, 900.0)),
                    (None, PriceBracket::new(900.0, 1500.0)),
                ]),
                depth_factors: bands(vec![(Some(5.0), 1.0), (Some(15.0), 1.15), (None, 1.3)]),
            },
            limits: InputLimits {
                max_area: 20000.0,
                max_snow_depth: 200.0,
                max_frequency: 150,
            },
        }
    }

    #[test]
    fn typical_season_compares_both_options() {
        let table = table();
        let input = WinterServiceInput {
            area: 120.0,
            snow_depth: 10.0,
            frequency: 20,
        };
        let result = WinterServiceEstimator::new(&table).estimate(&input);

        // 120 m² at 40 m²/h = 3 h per clearing, 60 h per season
        assert_eq!(result.diy.hours_per_clearing, 3.0);
        assert_eq!(result.diy.total_hours, 60.0);
        assert_eq!(result.diy.labor_value.value(), 900);
        assert_eq!(result.diy.grit_cost.value(), 120);
        assert_eq!(result.diy.total.value(), 1140);

        // [550, 900] * 1.15 = [632.5, 1035] -> [633, 1035]
        assert_eq!(result.professional.range.min.value(), 633);
        assert_eq!(result.professional.range.max.value(), 1035);
        assert_eq!(result.professional.frequency_factor, 1.0);
        assert_eq!(result.professional.midpoint.value(), 834);
        assert_eq!(result.cost_difference.value(), 834 - 1140);
    }

    #[test]
    fn frequency_above_included_scales_flat_rate() {
        let table = table();
        let input = WinterServiceInput {
            area: 50.0,
            snow_depth: 2.0,
            frequency: 40,
        };
        let result = WinterServiceEstimator::new(&table).estimate(&input);
        assert_eq!(result.professional.frequency_factor, 2.0);
        assert_eq!(result.professional.range.min.value(), 700);
        assert_eq!(result.professional.range.max.value(), 1100);
        assert_eq!(result.professional.per_clearing.value(), 23);
    }

    #[test]
    fn zero_area_yields_all_zero() {
        let table = table();
        let input = WinterServiceInput {
            area: 0.0,
            snow_depth: 10.0,
            frequency: 30,
        };
        let result = WinterServiceEstimator::new(&table).estimate(&input);
        assert_eq!(result, WinterServiceComparison::default());
    }

    #[test]
    fn zero_frequency_keeps_flat_rate_but_no_diy_cost() {
        let table = table();
        let input = WinterServiceInput {
            area: 80.0,
            snow_depth: 3.0,
            frequency: 0,
        };
        let result = WinterServiceEstimator::new(&table).estimate(&input);
        assert_eq!(result.diy.total, Euros::ZERO);
        assert_eq!(result.professional.range.min.value(), 350);
        assert_eq!(result.professional.per_clearing, Euros::ZERO);
    }

    #[test]
    fn negative_inputs_are_clamped_by_the_estimator() {
        let table = table();
        let input = WinterServiceInput {
            area: -50.0,
            snow_depth: f64::NAN,
            frequency: 10,
        };
        let result = WinterServiceEstimator::new(&table).estimate(&input);
        assert_eq!(result, WinterServiceComparison::default());
    }

    #[test]
    fn validate_rejects_out_of_limit_values() {
        let limits = table().limits;
        let ok = WinterServiceInput {
            area: 100.0,
            snow_depth: 10.0,
            frequency: 20,
        };
        assert!(ok.validate(&limits).is_ok());

        let negative = WinterServiceInput { area: -1.0, ..ok };
        assert_eq!(negative.validate(&limits).unwrap_err().field(), "area");

        let deep = WinterServiceInput { snow_depth: 250.0, ..ok };
        assert_eq!(deep.validate(&limits).unwrap_err().field(), "snowDepth");

        let often = WinterServiceInput { frequency: 151, ..ok };
        assert_eq!(often.validate(&limits).unwrap_err().field(), "frequency");

        let nan = WinterServiceInput { area: f64::INFINITY, ..ok };
        assert!(nan.validate(&limits).is_err());
    }

    #[test]
    fn reference_table_is_valid() {
        assert!(table().validate().is_ok());
    }
}
