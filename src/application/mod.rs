//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers own `Arc`s to the immutable catalog and the injected ports.

pub mod handlers;

pub use handlers::{
    AdviseStainHandler, AdviseStainQuery, CalculateWinterServiceCommand,
    CalculateWinterServiceHandler, EstimateDeclutteringCommand, EstimateDeclutteringHandler,
    RecommendDeicerCommand, RecommendDeicerHandler, ScoreAssessmentCommand,
    ScoreAssessmentHandler, ShareResultCommand, ShareResultHandler,
};
