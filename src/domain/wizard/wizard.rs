//! Wizard - one advisor run: step position plus collected answers.

use serde::Serialize;

use super::{AnswerStore, AnswerValue, StepController, Transition, WizardStep};
use crate::domain::estimator::Estimator;
use crate::domain::foundation::{CategoryId, QuestionId};
use crate::domain::schema::{AssessmentSchema, Category};
use crate::domain::scoring::{ScoreEngine, ScoreResult};

/// Outcome of [`Wizard::advance_checked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Navigation happened (including finishing into results).
    Step(Transition),
    /// A required question is unanswered; the view should scroll to and
    /// highlight it. The step does not change.
    Nudge {
        category: CategoryId,
        first_missing: QuestionId,
    },
}

/// Progress indicator for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub step: usize,
    pub total_steps: usize,
    pub answered: usize,
    pub questions: usize,
}

/// A single advisor run over an immutable schema.
///
/// Each wizard owns its answers; nothing is shared between instances.
#[derive(Debug, Clone)]
pub struct Wizard<'s> {
    schema: &'s AssessmentSchema,
    steps: StepController,
    answers: AnswerStore,
}

impl<'s> Wizard<'s> {
    pub fn new(schema: &'s AssessmentSchema) -> Self {
        Self {
            schema,
            steps: StepController::new(schema.category_count()),
            answers: AnswerStore::new(),
        }
    }

    pub fn schema(&self) -> &'s AssessmentSchema {
        self.schema
    }

    pub fn current_step(&self) -> WizardStep {
        self.steps.current()
    }

    /// Category shown on the current step, if it is a question step.
    pub fn current_category(&self) -> Option<&'s Category> {
        match self.steps.current() {
            WizardStep::Category(i) => self.schema.category_at(i),
            _ => None,
        }
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn set_answer(&mut self, category: CategoryId, question: QuestionId, value: AnswerValue) {
        self.answers.set_answer(category, question, value);
    }

    pub fn advance(&mut self) -> Transition {
        self.steps.advance()
    }

    /// Like [`advance`](Self::advance), but stays put while the current
    /// category has unanswered required questions.
    pub fn advance_checked(&mut self) -> Advance {
        if let Some(category) = self.current_category() {
            if let Some(missing) = self.missing_required(category).next() {
                return Advance::Nudge {
                    category: category.id.clone(),
                    first_missing: missing.clone(),
                };
            }
        }
        Advance::Step(self.steps.advance())
    }

    pub fn retreat(&mut self) -> Transition {
        self.steps.retreat()
    }

    pub fn go_to(&mut self, step: WizardStep) -> Transition {
        self.steps.go_to(step)
    }

    /// Returns to the intro step and discards every answer.
    pub fn reset(&mut self) {
        self.steps.reset();
        self.answers.clear();
    }

    /// Required questions of `category` that have no answer yet, in order.
    pub fn missing_required<'a>(
        &'a self,
        category: &'a Category,
    ) -> impl Iterator<Item = &'a QuestionId> + 'a {
        category
            .required_questions()
            .filter(move |q| !self.answers.is_answered(category.id.as_str(), q.id.as_str()))
            .map(|q| &q.id)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            step: self.steps.position(self.steps.current()),
            total_steps: self.steps.total_steps(),
            answered: self.answers.len(),
            questions: self.schema.question_count(),
        }
    }

    /// Scores the current answers; available once the wizard reached results.
    pub fn results(&self) -> Option<ScoreResult> {
        (self.steps.current() == WizardStep::Results).then(|| self.score())
    }

    /// Scores the current answers regardless of the step.
    pub fn score(&self) -> ScoreResult {
        ScoreEngine::new(self.schema).estimate(&self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
id: test-check
title: Test-Check
categories:
  - id: eins
    label: Eins
    questions:
      - id: pflicht
        prompt: Pflichtfrage
        required: true
        input: {kind: boolean, weight: 10}
      - id: optional
        prompt: Optionale Frage
        input: {kind: scale, weight: 10}
  - id: zwei
    label: Zwei
    questions:
      - id: wahl
        prompt: Auswahl
        required: true
        input:
          kind: single-choice
          options:
            - {value: a, label: A, weight: 0}
            - {value: b, label: B, weight: 10}
tiers:
  - {min: 50, label: Gut}
  - {min: 0, label: Schlecht}
"#;

    fn schema() -> AssessmentSchema {
        serde_yaml::from_str(SCHEMA).unwrap()
    }

    fn cat(id: &str) -> CategoryId {
        CategoryId::new(id).unwrap()
    }

    fn q(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    #[test]
    fn advance_checked_nudges_on_missing_required() {
        let schema = schema();
        let mut wizard = Wizard::new(&schema);
        wizard.advance();

        let outcome = wizard.advance_checked();
        assert_eq!(
            outcome,
            Advance::Nudge {
                category: cat("eins"),
                first_missing: q("pflicht"),
            }
        );
        assert_eq!(wizard.current_step(), WizardStep::Category(0));
    }

    #[test]
    fn advance_checked_moves_when_required_answered() {
        let schema = schema();
        let mut wizard = Wizard::new(&schema);
        wizard.advance();
        wizard.set_answer(cat("eins"), q("pflicht"), AnswerValue::token("ja"));

        assert_eq!(
            wizard.advance_checked(),
            Advance::Step(Transition::Moved(WizardStep::Category(1)))
        );
    }

    #[test]
    fn advance_checked_from_intro_never_nudges() {
        let schema = schema();
        let mut wizard = Wizard::new(&schema);
        assert_eq!(
            wizard.advance_checked(),
            Advance::Step(Transition::Moved(WizardStep::Category(0)))
        );
    }

    #[test]
    fn results_only_available_on_results_step() {
        let schema = schema();
        let mut wizard = Wizard::new(&schema);
        assert!(wizard.results().is_none());

        wizard.set_answer(cat("eins"), q("pflicht"), AnswerValue::token("ja"));
        wizard.set_answer(cat("zwei"), q("wahl"), AnswerValue::token("b"));
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.advance(), Transition::ComputeResults);

        let result = wizard.results().unwrap();
        assert_eq!(result.overall.achieved, 20);
        assert_eq!(result.overall.max, 30);
        assert_eq!(result.overall.percentage.value(), 67);
        assert_eq!(result.tier.label, "Gut");
    }

    #[test]
    fn reset_returns_to_intro_and_clears_answers() {
        let schema = schema();
        let mut wizard = Wizard::new(&schema);
        wizard.advance();
        wizard.set_answer(cat("eins"), q("pflicht"), AnswerValue::token("ja"));
        wizard.advance();
        wizard.advance();

        wizard.reset();

        assert_eq!(wizard.current_step(), WizardStep::Intro);
        assert!(wizard.answers().is_empty());
    }

    #[test]
    fn progress_reports_position_and_answers() {
        let schema = schema();
        let mut wizard = Wizard::new(&schema);
        wizard.advance();
        wizard.set_answer(cat("eins"), q("optional"), AnswerValue::scale(40));

        let progress = wizard.progress();
        assert_eq!(progress.step, 1);
        assert_eq!(progress.total_steps, 4);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.questions, 3);
    }
}
