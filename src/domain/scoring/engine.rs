//! ScoreEngine - weighted-percentage scoring over an assessment schema.

use super::recommendations::recommend;
use super::{CategoryScore, ScoreBreakdown, ScoreResult};
use crate::domain::estimator::Estimator;
use crate::domain::schema::{AssessmentSchema, QuestionKind};
use crate::domain::wizard::{AnswerStore, AnswerValue};

/// Scores one question's answer against its kind.
///
/// Unanswered questions, unknown tokens and answers of the wrong shape all
/// contribute zero.
pub fn question_score(kind: &QuestionKind, answer: Option<&AnswerValue>) -> u32 {
    match (kind, answer) {
        (QuestionKind::Boolean { weight, affirmative }, Some(AnswerValue::Token(token)))
            if token == affirmative =>
        {
            *weight
        }
        (QuestionKind::Scale { weight }, Some(AnswerValue::Scale(position))) => {
            // round(position / 100 * weight), half up
            let position = u64::from((*position).min(100));
            ((position * u64::from(*weight) + 50) / 100) as u32
        }
        (QuestionKind::SingleChoice { .. }, Some(AnswerValue::Token(token))) => {
            kind.option(token).map_or(0, |o| o.weight)
        }
        (QuestionKind::MultiChoice { options, .. }, Some(AnswerValue::Selections(selected))) => {
            let sum: u32 = options
                .iter()
                .filter(|o| selected.iter().any(|s| *s == o.value))
                .map(|o| o.weight)
                .sum();
            sum.min(kind.max_weight())
        }
        _ => 0,
    }
}

/// Folds an [`AnswerStore`] into a [`ScoreResult`] for one schema.
#[derive(Debug, Clone, Copy)]
pub struct ScoreEngine<'s> {
    schema: &'s AssessmentSchema,
}

impl<'s> ScoreEngine<'s> {
    pub fn new(schema: &'s AssessmentSchema) -> Self {
        Self { schema }
    }

    fn category_scores(&self, answers: &AnswerStore) -> Vec<CategoryScore> {
        self.schema
            .categories
            .iter()
            .map(|category| {
                let (achieved, max) = category.questions.iter().fold((0, 0), |(a, m), q| {
                    let answer = answers.get(category.id.as_str(), q.id.as_str());
                    (a + question_score(&q.input, answer), m + q.max_weight())
                });
                CategoryScore {
                    category: category.id.clone(),
                    label: category.label.clone(),
                    score: ScoreBreakdown::new(achieved, max),
                }
            })
            .collect()
    }
}

impl Estimator for ScoreEngine<'_> {
    type Input = AnswerStore;
    type Output = ScoreResult;

    fn estimate(&self, answers: &AnswerStore) -> ScoreResult {
        let categories = self.category_scores(answers);
        let (achieved, max) = categories
            .iter()
            .fold((0, 0), |(a, m), c| (a + c.score.achieved, m + c.score.max));
        let overall = ScoreBreakdown::new(achieved, max);
        let tier = self.schema.tiers.classify(overall.percentage).clone();
        let recommendations = recommend(self.schema, &categories);

        ScoreResult {
            tool: self.schema.id.clone(),
            categories,
            overall,
            tier,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::ChoiceOption;

    fn options(weights: &[(&str, u32)]) -> Vec<ChoiceOption> {
        weights
            .iter()
            .map(|(v, w)| ChoiceOption {
                value: v.to_string(),
                label: v.to_string(),
                weight: *w,
            })
            .collect()
    }

    #[test]
    fn boolean_scores_full_weight_only_for_affirmative() {
        let kind = QuestionKind::Boolean {
            weight: 15,
            affirmative: "ja".to_string(),
        };
        assert_eq!(question_score(&kind, Some(&AnswerValue::token("ja"))), 15);
        assert_eq!(question_score(&kind, Some(&AnswerValue::token("nein"))), 0);
        assert_eq!(question_score(&kind, Some(&AnswerValue::token("JA"))), 0);
        assert_eq!(question_score(&kind, None), 0);
    }

    #[test]
    fn scale_scores_proportionally_with_rounding() {
        let kind = QuestionKind::Scale { weight: 15 };
        assert_eq!(question_score(&kind, Some(&AnswerValue::Scale(0))), 0);
        assert_eq!(question_score(&kind, Some(&AnswerValue::Scale(50))), 8); // 7.5
        assert_eq!(question_score(&kind, Some(&AnswerValue::Scale(33))), 5); // 4.95
        assert_eq!(question_score(&kind, Some(&AnswerValue::Scale(100))), 15);
    }

    #[test]
    fn scale_over_100_is_clamped() {
        let kind = QuestionKind::Scale { weight: 10 };
        assert_eq!(question_score(&kind, Some(&AnswerValue::Scale(250))), 10);
    }

    #[test]
    fn single_choice_uses_option_weight() {
        let kind = QuestionKind::SingleChoice {
            options: options(&[("nie", 0), ("manchmal", 5), ("immer", 10)]),
        };
        assert_eq!(question_score(&kind, Some(&AnswerValue::token("manchmal"))), 5);
        assert_eq!(question_score(&kind, Some(&AnswerValue::token("unbekannt"))), 0);
    }

    #[test]
    fn multi_choice_sums_and_caps() {
        let kind = QuestionKind::MultiChoice {
            options: options(&[("a", 4), ("b", 4), ("c", 4)]),
            cap: Some(10),
        };
        assert_eq!(question_score(&kind, Some(&AnswerValue::selections(["a"]))), 4);
        assert_eq!(question_score(&kind, Some(&AnswerValue::selections(["a", "b", "c"]))), 10);
        // duplicates and unknown values do not add up
        assert_eq!(question_score(&kind, Some(&AnswerValue::selections(["a", "a", "x"]))), 4);
    }

    #[test]
    fn mismatched_answer_shape_scores_zero() {
        let kind = QuestionKind::Scale { weight: 10 };
        assert_eq!(question_score(&kind, Some(&AnswerValue::token("100"))), 0);
    }
}
