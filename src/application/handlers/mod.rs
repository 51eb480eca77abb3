//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod advisor;

pub use advisor::{
    AdviseStainHandler, AdviseStainQuery, CalculateWinterServiceCommand,
    CalculateWinterServiceHandler, EstimateDeclutteringCommand, EstimateDeclutteringHandler,
    RecommendDeicerCommand, RecommendDeicerHandler, ScoreAssessmentCommand,
    ScoreAssessmentHandler, ShareResultCommand, ShareResultHandler,
};
