//! Threshold ladders that map a percentage to a discrete tier.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, ValidationError};

/// One rung of a ladder: percentages `>= min` reach this tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub min: u8,
    pub label: String,
    /// Presentation key (e.g. `green`, `red`) for the result badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tiers ordered by descending `min`, the last rung starting at 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct TierLadder(Vec<Tier>);

impl TierLadder {
    pub fn new(tiers: Vec<Tier>) -> Result<Self, ValidationError> {
        if tiers.is_empty() {
            return Err(ValidationError::empty_field("tiers"));
        }
        for pair in tiers.windows(2) {
            if pair[0].min <= pair[1].min {
                return Err(ValidationError::invalid_format(
                    "tiers",
                    format!(
                        "thresholds must be strictly descending ({} then {})",
                        pair[0].min, pair[1].min
                    ),
                ));
            }
        }
        if let Some(first) = tiers.first() {
            if first.min > 100 {
                return Err(ValidationError::out_of_range(
                    "tiers.min",
                    0,
                    100,
                    i64::from(first.min),
                ));
            }
        }
        if tiers.last().map(|t| t.min) != Some(0) {
            return Err(ValidationError::invalid_format(
                "tiers",
                "lowest tier must start at 0",
            ));
        }
        Ok(Self(tiers))
    }

    /// Returns the first tier whose threshold the percentage reaches.
    pub fn classify(&self, percentage: Percentage) -> &Tier {
        self.0
            .iter()
            .find(|t| percentage.value() >= t.min)
            .unwrap_or_else(|| &self.0[self.0.len() - 1])
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.0
    }
}

impl TryFrom<Vec<Tier>> for TierLadder {
    type Error = ValidationError;

    fn try_from(tiers: Vec<Tier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<TierLadder> for Vec<Tier> {
    fn from(ladder: TierLadder) -> Self {
        ladder.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(min: u8, label: &str) -> Tier {
        Tier {
            min,
            label: label.to_string(),
            color: None,
            description: None,
        }
    }

    fn risk_ladder() -> TierLadder {
        TierLadder::new(vec![
            tier(80, "Niedrig"),
            tier(60, "Mittel"),
            tier(40, "Hoch"),
            tier(0, "Kritisch"),
        ])
        .unwrap()
    }

    #[test]
    fn classify_uses_inclusive_lower_bounds() {
        let ladder = risk_ladder();
        assert_eq!(ladder.classify(Percentage::new(100)).label, "Niedrig");
        assert_eq!(ladder.classify(Percentage::new(80)).label, "Niedrig");
        assert_eq!(ladder.classify(Percentage::new(79)).label, "Mittel");
        assert_eq!(ladder.classify(Percentage::new(60)).label, "Mittel");
        assert_eq!(ladder.classify(Percentage::new(40)).label, "Hoch");
        assert_eq!(ladder.classify(Percentage::new(39)).label, "Kritisch");
        assert_eq!(ladder.classify(Percentage::ZERO).label, "Kritisch");
    }

    #[test]
    fn new_rejects_ascending_thresholds() {
        let result = TierLadder::new(vec![tier(40, "a"), tier(60, "b"), tier(0, "c")]);
        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_ladder_without_zero_floor() {
        assert!(TierLadder::new(vec![tier(80, "a"), tier(40, "b")]).is_err());
    }

    #[test]
    fn new_rejects_empty_ladder() {
        assert!(TierLadder::new(vec![]).is_err());
    }

    #[test]
    fn deserializes_and_validates_from_yaml() {
        let yaml = "- {min: 50, label: Gut}\n- {min: 0, label: Schlecht}\n";
        let ladder: TierLadder = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(ladder.tiers().len(), 2);

        let invalid = "- {min: 0, label: Gut}\n- {min: 50, label: Schlecht}\n";
        assert!(serde_yaml::from_str::<TierLadder>(invalid).is_err());
    }
}
