//! StepController - ordering logic for wizard steps.
//!
//! # Step Order
//!
//! Intro → Category(0) → ... → Category(n-1) → Results
//!
//! Leaving the last category does not move to another question step; it
//! signals that results should be computed.

use serde::{Deserialize, Serialize};

/// A position in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "step", content = "index", rename_all = "snake_case")]
pub enum WizardStep {
    Intro,
    Category(usize),
    Results,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved to the contained step.
    Moved(WizardStep),
    /// Left the last question step; the caller should compute results.
    ComputeResults,
    /// Request was a no-op.
    Unchanged,
}

/// Tracks the current step of a wizard with `category_count` question steps.
///
/// Every operation is total: requests that would leave the valid range are
/// no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepController {
    category_count: usize,
    current: WizardStep,
}

impl StepController {
    pub fn new(category_count: usize) -> Self {
        Self {
            category_count,
            current: WizardStep::Intro,
        }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    pub fn category_count(&self) -> usize {
        self.category_count
    }

    /// Moves forward one step.
    pub fn advance(&mut self) -> Transition {
        match self.current {
            WizardStep::Intro if self.category_count == 0 => self.finish(),
            WizardStep::Intro => self.move_to(WizardStep::Category(0)),
            WizardStep::Category(i) if i + 1 < self.category_count => {
                self.move_to(WizardStep::Category(i + 1))
            }
            WizardStep::Category(_) => self.finish(),
            WizardStep::Results => Transition::Unchanged,
        }
    }

    /// Moves back one step; the first question step returns to the intro.
    pub fn retreat(&mut self) -> Transition {
        match self.current {
            WizardStep::Intro => Transition::Unchanged,
            WizardStep::Category(0) => self.move_to(WizardStep::Intro),
            WizardStep::Category(i) => self.move_to(WizardStep::Category(i - 1)),
            WizardStep::Results if self.category_count == 0 => self.move_to(WizardStep::Intro),
            WizardStep::Results => self.move_to(WizardStep::Category(self.category_count - 1)),
        }
    }

    /// Jumps directly to `step` if it exists.
    pub fn go_to(&mut self, step: WizardStep) -> Transition {
        if !self.contains(step) || step == self.current {
            return Transition::Unchanged;
        }
        self.move_to(step)
    }

    pub fn reset(&mut self) {
        self.current = WizardStep::Intro;
    }

    pub fn contains(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Category(i) => i < self.category_count,
            WizardStep::Intro | WizardStep::Results => true,
        }
    }

    /// 0-based position of `step` in the full sequence.
    pub fn position(&self, step: WizardStep) -> usize {
        match step {
            WizardStep::Intro => 0,
            WizardStep::Category(i) => i + 1,
            WizardStep::Results => self.category_count + 1,
        }
    }

    /// Number of steps including intro and results.
    pub fn total_steps(&self) -> usize {
        self.category_count + 2
    }

    pub fn is_first_question(&self) -> bool {
        self.current == WizardStep::Category(0)
    }

    pub fn is_last_question(&self) -> bool {
        self.category_count > 0 && self.current == WizardStep::Category(self.category_count - 1)
    }

    fn move_to(&mut self, step: WizardStep) -> Transition {
        self.current = step;
        Transition::Moved(step)
    }

    fn finish(&mut self) -> Transition {
        self.current = WizardStep::Results;
        Transition::ComputeResults
    }
}
