//! Advisor handlers - one per tool operation.

mod advise_stain;
mod calculate_winter_service;
mod estimate_decluttering;
mod recommend_deicer;
mod score_assessment;
mod share_result;

pub use advise_stain::{AdviseStainHandler, AdviseStainQuery};
pub use calculate_winter_service::{CalculateWinterServiceCommand, CalculateWinterServiceHandler};
pub use estimate_decluttering::{EstimateDeclutteringCommand, EstimateDeclutteringHandler};
pub use recommend_deicer::{RecommendDeicerCommand, RecommendDeicerHandler};
pub use score_assessment::{ScoreAssessmentCommand, ScoreAssessmentHandler};
pub use share_result::{ShareResultCommand, ShareResultHandler};
