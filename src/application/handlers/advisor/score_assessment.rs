//! ScoreAssessmentHandler - Command handler for scoring a weighted assessment.

use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::DomainError;
use crate::domain::scoring::{ScoreEngine, ScoreResult};
use crate::domain::wizard::AnswerStore;
use crate::domain::Estimator;
use crate::ports::CosmeticDelay;

/// Command to score a set of answers against one assessment.
#[derive(Debug, Clone)]
pub struct ScoreAssessmentCommand {
    pub tool_id: String,
    pub answers: AnswerStore,
}

pub struct ScoreAssessmentHandler {
    catalog: Arc<Catalog>,
    delay: Arc<dyn CosmeticDelay>,
}

impl ScoreAssessmentHandler {
    pub fn new(catalog: Arc<Catalog>, delay: Arc<dyn CosmeticDelay>) -> Self {
        Self { catalog, delay }
    }

    pub async fn handle(&self, cmd: ScoreAssessmentCommand) -> Result<ScoreResult, DomainError> {
        let schema = self.catalog.require_assessment(&cmd.tool_id)?;

        let unknown = cmd
            .answers
            .iter()
            .filter(|(category, question, _)| {
                schema
                    .category(category.as_str())
                    .and_then(|c| c.question(question.as_str()))
                    .is_none()
            })
            .count();
        if unknown > 0 {
            tracing::warn!(tool = %cmd.tool_id, unknown, "Ignoring answers to unknown questions");
        }

        let result = ScoreEngine::new(schema).estimate(&cmd.answers);
        self.delay.pause().await;

        tracing::debug!(
            tool = %cmd.tool_id,
            percentage = result.overall.percentage.value(),
            tier = %result.tier.label,
            "Scored assessment"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::EmbeddedCatalog;
    use crate::adapters::delay::NoDelay;
    use crate::domain::foundation::{CategoryId, ErrorCode, QuestionId};
    use crate::domain::wizard::AnswerValue;

    fn handler() -> ScoreAssessmentHandler {
        let catalog = Arc::new(EmbeddedCatalog::catalog().unwrap());
        ScoreAssessmentHandler::new(catalog, Arc::new(NoDelay))
    }

    fn answer(category: &str, question: &str, value: AnswerValue) -> (CategoryId, QuestionId, AnswerValue) {
        (
            CategoryId::new(category).unwrap(),
            QuestionId::new(question).unwrap(),
            value,
        )
    }

    #[tokio::test]
    async fn empty_answers_score_zero() {
        let result = handler()
            .handle(ScoreAssessmentCommand {
                tool_id: "security-check".to_string(),
                answers: AnswerStore::new(),
            })
            .await
            .unwrap();
        assert_eq!(result.overall.percentage.value(), 0);
        assert_eq!(result.tier.label, "Kritisch");
    }

    #[tokio::test]
    async fn unknown_answers_are_ignored() {
        let answers: AnswerStore = vec![
            answer("zutritt", "schliesssystem", AnswerValue::token("ja")),
            answer("phantasie", "frage", AnswerValue::token("ja")),
        ]
        .into_iter()
        .collect();
        let result = handler()
            .handle(ScoreAssessmentCommand {
                tool_id: "security-check".to_string(),
                answers,
            })
            .await
            .unwrap();
        assert_eq!(result.category("zutritt").unwrap().score.achieved, 15);
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let err = handler()
            .handle(ScoreAssessmentCommand {
                tool_id: "garden-check".to_string(),
                answers: AnswerStore::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ToolNotFound);
    }
}
