//! Stain-removal advisor (lookup variant of the estimator).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::estimator::Estimator;
use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub label: String,
    /// Delicate fabrics (silk, wool, leather) need professional care for dried stains.
    #[serde(default)]
    pub delicate: bool,
}

/// Cleaning instructions for one stain, optionally specific to a material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub steps: Vec<String>,
    #[serde(default)]
    pub household_agents: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub professional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StainEntry {
    pub id: String,
    pub label: String,
    #[serde(rename = "default")]
    pub default_solution: Solution,
    /// Material id → specific solution.
    #[serde(default)]
    pub by_material: BTreeMap<String, Solution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StainTable {
    pub title: String,
    pub materials: Vec<Material>,
    pub stains: Vec<StainEntry>,
    /// Used when the stain is unknown.
    pub fallback: Solution,
    /// Prepended to the steps of dried stains.
    pub dried_pretreatment: String,
}

impl StainTable {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.fallback.steps.is_empty() {
            return Err(ValidationError::empty_field("fallback.steps"));
        }
        for stain in &self.stains {
            if stain.default_solution.steps.is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "stains.{}.default.steps",
                    stain.id
                )));
            }
            if let Some(material) = stain
                .by_material
                .keys()
                .find(|m| !self.materials.iter().any(|known| known.id == **m))
            {
                return Err(ValidationError::invalid_format(
                    format!("stains.{}.by_material", stain.id),
                    format!("unknown material '{}'", material),
                ));
            }
        }
        Ok(())
    }

    fn is_delicate(&self, material: &str) -> bool {
        self.materials
            .iter()
            .any(|m| m.id == material && m.delicate)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StainAge {
    #[default]
    Fresh,
    Dried,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StainInput {
    pub stain: String,
    pub material: String,
    #[serde(default)]
    pub age: StainAge,
}

/// How specific the matched table entry was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchLevel {
    Exact,
    StainDefault,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StainAdvice {
    pub match_level: MatchLevel,
    pub stain_label: Option<String>,
    pub steps: Vec<String>,
    pub household_agents: Vec<String>,
    pub warnings: Vec<String>,
    pub professional: bool,
}

pub struct StainAdvisor<'t> {
    table: &'t StainTable,
}

impl<'t> StainAdvisor<'t> {
    pub fn new(table: &'t StainTable) -> Self {
        Self { table }
    }

    fn lookup(&self, input: &StainInput) -> (MatchLevel, Option<&'t StainEntry>, &'t Solution) {
        let Some(entry) = self.table.stains.iter().find(|s| s.id == input.stain) else {
            return (MatchLevel::Fallback, None, &self.table.fallback);
        };
        match entry.by_material.get(&input.material) {
            Some(solution) => (MatchLevel::Exact, Some(entry), solution),
            None => (MatchLevel::StainDefault, Some(entry), &entry.default_solution),
        }
    }
}

impl Estimator for StainAdvisor<'_> {
    type Input = StainInput;
    type Output = StainAdvice;

    fn estimate(&self, input: &StainInput) -> StainAdvice {
        let (match_level, entry, solution) = self.lookup(input);
        let dried = input.age == StainAge::Dried;

        let mut steps = Vec::with_capacity(solution.steps.len() + 1);
        if dried {
            steps.push(self.table.dried_pretreatment.clone());
        }
        steps.extend(solution.steps.iter().cloned());

        StainAdvice {
            match_level,
            stain_label: entry.map(|e| e.label.clone()),
            steps,
            household_agents: solution.household_agents.clone(),
            warnings: solution.warnings.clone(),
            professional: solution.professional
                || (dried && self.table.is_delicate(&input.material)),
        }
    }
}
