//! De-icing agent recommender (ranking variant of the estimator).
//!
//! Agents that stop working above the expected temperature, or that damage
//! the chosen surface, are excluded. The remaining agents are ranked by a
//! weighted score of effectiveness, environmental impact, pet safety and
//! cost. Sorting is stable, so table order breaks ties.

use serde::{Deserialize, Serialize};

use crate::domain::estimator::Estimator;
use crate::domain::foundation::{Percentage, ValidationError};

/// Ratings use a 1 (worst) to 5 (best) scale.
const RATING_MIN: u8 = 1;
const RATING_MAX: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeicingAgent {
    pub id: String,
    pub label: String,
    /// Lowest temperature (°C) at which the agent still melts ice.
    /// Abrasive agents have none.
    #[serde(default)]
    pub effective_to: Option<f64>,
    /// Surface ids the agent damages.
    #[serde(default)]
    pub damages: Vec<String>,
    pub effectiveness: u8,
    pub eco: u8,
    pub pet_safety: u8,
    /// Affordability: 5 is cheapest.
    pub affordability: u8,
    #[serde(default)]
    pub note: Option<String>,
}

/// Relative weights of the ranking criteria.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    pub effectiveness: f64,
    pub eco: f64,
    pub pet_safety: f64,
    pub affordability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeicingTable {
    pub title: String,
    pub surfaces: Vec<Surface>,
    pub agents: Vec<DeicingAgent>,
    pub weights: RankingWeights,
}

impl DeicingTable {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.surfaces.is_empty() {
            return Err(ValidationError::empty_field("surfaces"));
        }
        if self.agents.is_empty() {
            return Err(ValidationError::empty_field("agents"));
        }
        for agent in &self.agents {
            for (name, rating) in [
                ("effectiveness", agent.effectiveness),
                ("eco", agent.eco),
                ("pet_safety", agent.pet_safety),
                ("affordability", agent.affordability),
            ] {
                if !(RATING_MIN..=RATING_MAX).contains(&rating) {
                    return Err(ValidationError::out_of_range(
                        format!("agents.{}.{}", agent.id, name),
                        i64::from(RATING_MIN),
                        i64::from(RATING_MAX),
                        i64::from(rating),
                    ));
                }
            }
            if let Some(surface) = agent
                .damages
                .iter()
                .find(|s| !self.surfaces.iter().any(|known| known.id == **s))
            {
                return Err(ValidationError::invalid_format(
                    format!("agents.{}.damages", agent.id),
                    format!("unknown surface '{}'", surface),
                ));
            }
        }
        let w = &self.weights;
        let all = [w.effectiveness, w.eco, w.pet_safety, w.affordability];
        if all.iter().any(|x| !x.is_finite() || *x < 0.0) || all.iter().sum::<f64>() <= 0.0 {
            return Err(ValidationError::invalid_format(
                "weights",
                "weights must be non-negative with a positive sum",
            ));
        }
        Ok(())
    }

    /// Surface by id, falling back to the first surface.
    pub fn surface(&self, id: &str) -> Option<&Surface> {
        self.surfaces
            .iter()
            .find(|s| s.id == id)
            .or_else(|| self.surfaces.first())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeicingInput {
    pub surface: String,
    /// Lowest expected temperature in °C.
    pub temperature: f64,
    /// How much environmental impact matters, 0-100.
    #[serde(default = "default_eco_priority")]
    pub eco_priority: u8,
    /// Pets or sensitive plants near the cleared area.
    #[serde(default)]
    pub pets_or_plants: bool,
}

fn default_eco_priority() -> u8 {
    50
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum Exclusion {
    TooCold { effective_to: f64 },
    DamagesSurface { surface: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedAgent {
    pub agent: String,
    pub label: String,
    #[serde(flatten)]
    pub exclusion: Exclusion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAgent {
    pub agent: String,
    pub label: String,
    pub score: Percentage,
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeicingAdvice {
    pub surface: String,
    /// Id of the best-ranked agent, if any survived the exclusions.
    pub recommended: Option<String>,
    pub ranking: Vec<RankedAgent>,
    pub excluded: Vec<ExcludedAgent>,
}

pub struct DeicingRecommender<'t> {
    table: &'t DeicingTable,
}

impl<'t> DeicingRecommender<'t> {
    pub fn new(table: &'t DeicingTable) -> Self {
        Self { table }
    }

    fn exclusion(agent: &DeicingAgent, surface: &str, temperature: f64) -> Option<Exclusion> {
        if let Some(effective_to) = agent.effective_to {
            if temperature < effective_to {
                return Some(Exclusion::TooCold { effective_to });
            }
        }
        agent
            .damages
            .iter()
            .any(|s| s == surface)
            .then(|| Exclusion::DamagesSurface {
                surface: surface.to_string(),
            })
    }

    fn score(&self, agent: &DeicingAgent, input: &DeicingInput) -> Percentage {
        let w = &self.table.weights;
        let eco_weight = w.eco * f64::from(input.eco_priority.min(100)) / 100.0;
        let pet_weight = if input.pets_or_plants { w.pet_safety } else { 0.0 };

        let terms = [
            (w.effectiveness, agent.effectiveness),
            (eco_weight, agent.eco),
            (pet_weight, agent.pet_safety),
            (w.affordability, agent.affordability),
        ];
        let total_weight: f64 = terms.iter().map(|(weight, _)| weight).sum();
        if total_weight <= 0.0 {
            return Percentage::ZERO;
        }
        let weighted: f64 = terms
            .iter()
            .map(|(weight, rating)| weight * normalized(*rating))
            .sum();
        Percentage::new((100.0 * weighted / total_weight).round() as u8)
    }

    fn reasons(agent: &DeicingAgent, input: &DeicingInput) -> Vec<String> {
        let mut reasons = Vec::new();
        match agent.effective_to {
            Some(t) => reasons.push(format!("Wirksam bis {} °C", t)),
            None => reasons.push("Abstumpfend, wirkt bei jeder Temperatur".to_string()),
        }
        if agent.eco >= 4 {
            reasons.push("Umweltschonend".to_string());
        }
        if input.pets_or_plants && agent.pet_safety >= 4 {
            reasons.push("Verträglich für Haustiere und Pflanzen".to_string());
        }
        if agent.affordability >= 4 {
            reasons.push("Günstig".to_string());
        }
        reasons
    }
}

fn normalized(rating: u8) -> f64 {
    let clamped = rating.clamp(RATING_MIN, RATING_MAX);
    f64::from(clamped - RATING_MIN) / f64::from(RATING_MAX - RATING_MIN)
}

impl Estimator for DeicingRecommender<'_> {
    type Input = DeicingInput;
    type Output = DeicingAdvice;

    fn estimate(&self, input: &DeicingInput) -> DeicingAdvice {
        let surface = self
            .table
            .surface(&input.surface)
            .map(|s| s.id.clone())
            .unwrap_or_default();
        let temperature = if input.temperature.is_finite() {
            input.temperature
        } else {
            0.0
        };

        let mut ranking = Vec::new();
        let mut excluded = Vec::new();
        for agent in &self.table.agents {
            match Self::exclusion(agent, &surface, temperature) {
                Some(exclusion) => excluded.push(ExcludedAgent {
                    agent: agent.id.clone(),
                    label: agent.label.clone(),
                    exclusion,
                }),
                None => ranking.push(RankedAgent {
                    agent: agent.id.clone(),
                    label: agent.label.clone(),
                    score: self.score(agent, input),
                    reasons: Self::reasons(agent, input),
                    note: agent.note.clone(),
                }),
            }
        }
        // stable: equal scores keep table order
        ranking.sort_by(|a, b| b.score.cmp(&a.score));

        DeicingAdvice {
            surface,
            recommended: ranking.first().map(|r| r.agent.clone()),
            ranking,
            excluded,
        }
    }
}
