//! Advice module - ranking and lookup variants of the estimator.

mod deicing;
mod stain;

pub use deicing::{
    DeicingAdvice, DeicingAgent, DeicingInput, DeicingRecommender, DeicingTable, ExcludedAgent,
    Exclusion, RankedAgent, RankingWeights, Surface,
};
pub use stain::{
    MatchLevel, Material, Solution, StainAdvice, StainAdvisor, StainAge, StainEntry, StainInput,
    StainTable,
};
