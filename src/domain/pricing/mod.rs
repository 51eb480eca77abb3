//! Pricing module - price-range variants of the estimator.
//!
//! Bracket tables, multiplicative factors and flat offsets; results are
//! rounded to whole euros with `min <= max` preserved.

mod decluttering;
mod range;
mod winter_service;

pub use decluttering::{
    DeclutteringEstimate, DeclutteringEstimator, DeclutteringInput, DeclutteringTable,
    ExtraService, PriceFactor, RoomType, SizeAdjustment,
};
pub use range::{PriceBracket, PriceRange};
pub use winter_service::{
    DiyCosts, DiyRates, InputLimits, ProfessionalCosts, ProfessionalRates,
    WinterServiceComparison, WinterServiceEstimator, WinterServiceInput, WinterServiceTable,
};
