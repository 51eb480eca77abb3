//! Question definitions and their input kinds.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, ValidationError};

/// Token that counts as "yes" when a boolean question does not name its own.
pub const DEFAULT_AFFIRMATIVE: &str = "ja";

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub weight: u32,
}

/// How a question is answered and how its answer is weighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Yes/no; full weight when the answer equals `affirmative`.
    Boolean {
        weight: u32,
        #[serde(default = "default_affirmative")]
        affirmative: String,
    },
    /// Slider from 0 to 100, scored proportionally.
    Scale { weight: u32 },
    /// Exactly one option; scored with that option's weight.
    SingleChoice { options: Vec<ChoiceOption> },
    /// Any subset of options; summed weights capped at `cap`.
    MultiChoice {
        options: Vec<ChoiceOption>,
        #[serde(default)]
        cap: Option<u32>,
    },
}

fn default_affirmative() -> String {
    DEFAULT_AFFIRMATIVE.to_string()
}

impl QuestionKind {
    /// Maximum weight an answer to this question can achieve.
    pub fn max_weight(&self) -> u32 {
        match self {
            QuestionKind::Boolean { weight, .. } | QuestionKind::Scale { weight } => *weight,
            QuestionKind::SingleChoice { options } => {
                options.iter().map(|o| o.weight).max().unwrap_or(0)
            }
            QuestionKind::MultiChoice { options, cap } => {
                let sum: u32 = options.iter().map(|o| o.weight).sum();
                cap.map_or(sum, |c| c.min(sum))
            }
        }
    }

    /// Returns the options of a choice question, empty for the other kinds.
    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            QuestionKind::SingleChoice { options } | QuestionKind::MultiChoice { options, .. } => {
                options
            }
            _ => &[],
        }
    }

    /// Looks up an option by its value token.
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.options().iter().find(|o| o.value == value)
    }
}

/// A single input item of an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Required questions block [`advance_checked`](crate::domain::wizard::Wizard::advance_checked).
    #[serde(default)]
    pub required: bool,
    pub input: QuestionKind,
}

impl Question {
    pub fn max_weight(&self) -> u32 {
        self.input.max_weight()
    }

    /// Checks option tables for emptiness and duplicate values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::empty_field(format!(
                "questions.{}.prompt",
                self.id
            )));
        }
        match &self.input {
            QuestionKind::SingleChoice { options } | QuestionKind::MultiChoice { options, .. } => {
                if options.is_empty() {
                    return Err(ValidationError::empty_field(format!(
                        "questions.{}.options",
                        self.id
                    )));
                }
                for (i, option) in options.iter().enumerate() {
                    if options[..i].iter().any(|o| o.value == option.value) {
                        return Err(ValidationError::invalid_format(
                            format!("questions.{}.options", self.id),
                            format!("duplicate option value '{}'", option.value),
                        ));
                    }
                }
            }
            QuestionKind::Boolean { affirmative, .. } if affirmative.is_empty() => {
                return Err(ValidationError::empty_field(format!(
                    "questions.{}.affirmative",
                    self.id
                )));
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: &str, weight: u32) -> ChoiceOption {
        ChoiceOption {
            value: value.to_string(),
            label: value.to_uppercase(),
            weight,
        }
    }

    fn question(input: QuestionKind) -> Question {
        Question {
            id: QuestionId::new("q").unwrap(),
            prompt: "Frage?".to_string(),
            help: None,
            required: false,
            input,
        }
    }

    #[test]
    fn single_choice_max_weight_is_best_option() {
        let kind = QuestionKind::SingleChoice {
            options: vec![option("a", 0), option("b", 7), option("c", 3)],
        };
        assert_eq!(kind.max_weight(), 7);
    }

    #[test]
    fn multi_choice_max_weight_respects_cap() {
        let options = vec![option("a", 4), option("b", 4), option("c", 4)];
        let capped = QuestionKind::MultiChoice {
            options: options.clone(),
            cap: Some(10),
        };
        let uncapped = QuestionKind::MultiChoice { options, cap: None };
        assert_eq!(capped.max_weight(), 10);
        assert_eq!(uncapped.max_weight(), 12);
    }

    #[test]
    fn boolean_kind_deserializes_with_default_affirmative() {
        let kind: QuestionKind = serde_yaml::from_str("kind: boolean\nweight: 10\n").unwrap();
        assert_eq!(
            kind,
            QuestionKind::Boolean {
                weight: 10,
                affirmative: "ja".to_string()
            }
        );
    }

    #[test]
    fn single_choice_deserializes_from_kebab_case_tag() {
        let yaml = "kind: single-choice\noptions:\n  - {value: nie, label: Nie, weight: 0}\n  - {value: immer, label: Immer, weight: 5}\n";
        let kind: QuestionKind = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(kind.options().len(), 2);
        assert_eq!(kind.option("immer").map(|o| o.weight), Some(5));
    }

    #[test]
    fn validate_rejects_duplicate_options() {
        let q = question(QuestionKind::SingleChoice {
            options: vec![option("a", 1), option("a", 2)],
        });
        assert!(q.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_choice() {
        let q = question(QuestionKind::MultiChoice {
            options: vec![],
            cap: None,
        });
        assert!(q.validate().is_err());
    }

    #[test]
    fn validate_accepts_scale() {
        assert!(question(QuestionKind::Scale { weight: 10 }).validate().is_ok());
    }
}
