//! AnswerStore - the latest answer per (category, question).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, QuestionId};

/// A user-provided answer, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    /// Boolean and single-choice answers (`"ja"`, `"woechentlich"`, ...).
    Token(String),
    /// Slider position, 0 to 100.
    Scale(u8),
    /// Multi-choice answers.
    Selections(Vec<String>),
}

impl AnswerValue {
    pub fn token(value: impl Into<String>) -> Self {
        AnswerValue::Token(value.into())
    }

    /// Creates a scale answer, clamping to 100.
    pub fn scale(value: u8) -> Self {
        AnswerValue::Scale(value.min(100))
    }

    pub fn selections<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnswerValue::Selections(values.into_iter().map(Into::into).collect())
    }
}

/// Mapping from (category, question) to the most recent answer.
///
/// Absence means "unanswered"; scoring treats it as zero contribution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    answers: HashMap<CategoryId, HashMap<QuestionId, AnswerValue>>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value`, replacing any earlier answer to the same question.
    pub fn set_answer(&mut self, category: CategoryId, question: QuestionId, value: AnswerValue) {
        self.answers
            .entry(category)
            .or_default()
            .insert(question, value);
    }

    pub fn get(&self, category: &str, question: &str) -> Option<&AnswerValue> {
        self.answers.get(category)?.get(question)
    }

    pub fn is_answered(&self, category: &str, question: &str) -> bool {
        self.get(category, question).is_some()
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, &QuestionId, &AnswerValue)> {
        self.answers
            .iter()
            .flat_map(|(c, qs)| qs.iter().map(move |(q, v)| (c, q, v)))
    }
}

impl FromIterator<(CategoryId, QuestionId, AnswerValue)> for AnswerStore {
    fn from_iter<I: IntoIterator<Item = (CategoryId, QuestionId, AnswerValue)>>(iter: I) -> Self {
        let mut store = AnswerStore::new();
        for (category, question, value) in iter {
            store.set_answer(category, question, value);
        }
        store
    }
}
