//! Free-text recommendations derived from category scores.

use super::{CategoryScore, Recommendation, Severity};
use crate::domain::schema::{AssessmentSchema, Category};

/// Builds remediation messages for weak categories, followed by the
/// schema's closing recommendations.
///
/// A category below its improvement threshold gets its `urgent` text when it
/// scores under half the threshold, otherwise its `advisory` text.
pub fn recommend(schema: &AssessmentSchema, scores: &[CategoryScore]) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = schema
        .categories
        .iter()
        .zip(scores)
        .filter_map(|(category, score)| remediation_for(category, score))
        .collect();

    recommendations.extend(schema.closing_recommendations.iter().map(|message| {
        Recommendation {
            category: None,
            severity: Severity::General,
            message: message.clone(),
        }
    }));

    recommendations
}

fn remediation_for(category: &Category, score: &CategoryScore) -> Option<Recommendation> {
    let percentage = u16::from(score.score.percentage.value());
    let threshold = u16::from(category.improvement_threshold);
    if percentage >= threshold {
        return None;
    }

    let severity = if percentage * 2 < threshold {
        Severity::Urgent
    } else {
        Severity::Advisory
    };

    let message = match (&category.remediation, severity) {
        (Some(r), Severity::Urgent) => r.urgent.clone(),
        (Some(r), _) => r.advisory.clone(),
        (None, _) => format!("{}: Hier besteht Verbesserungsbedarf.", category.label),
    };

    Some(Recommendation {
        category: Some(category.id.clone()),
        severity,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CategoryId, QuestionId};
    use crate::domain::schema::{Question, QuestionKind, Remediation, Tier, TierLadder};
    use crate::domain::scoring::ScoreBreakdown;

    fn schema(threshold: u8, remediation: Option<Remediation>) -> AssessmentSchema {
        AssessmentSchema {
            id: "test".parse().unwrap(),
            title: "Test".to_string(),
            intro: None,
            categories: vec![Category {
                id: CategoryId::new("zutritt").unwrap(),
                label: "Zutritt".to_string(),
                icon: None,
                questions: vec![Question {
                    id: QuestionId::new("schloss").unwrap(),
                    prompt: "Schloss?".to_string(),
                    help: None,
                    required: false,
                    input: QuestionKind::Scale { weight: 100 },
                }],
                improvement_threshold: threshold,
                remediation,
            }],
            tiers: TierLadder::new(vec![Tier {
                min: 0,
                label: "Alle".to_string(),
                color: None,
                description: None,
            }])
            .unwrap(),
            closing_recommendations: vec!["Lassen Sie sich beraten.".to_string()],
        }
    }

    fn score(achieved: u32) -> Vec<CategoryScore> {
        vec![CategoryScore {
            category: CategoryId::new("zutritt").unwrap(),
            label: "Zutritt".to_string(),
            score: ScoreBreakdown::new(achieved, 100),
        }]
    }

    fn remediation() -> Option<Remediation> {
        Some(Remediation {
            urgent: "Sofort handeln".to_string(),
            advisory: "Nachbessern".to_string(),
        })
    }

    #[test]
    fn category_at_threshold_gets_no_remediation() {
        let recs = recommend(&schema(70, remediation()), &score(70));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::General);
    }

    #[test]
    fn category_just_below_threshold_is_advisory() {
        let recs = recommend(&schema(70, remediation()), &score(69));
        assert_eq!(recs[0].severity, Severity::Advisory);
        assert_eq!(recs[0].message, "Nachbessern");
    }

    #[test]
    fn category_below_half_threshold_is_urgent() {
        let recs = recommend(&schema(70, remediation()), &score(34));
        assert_eq!(recs[0].severity, Severity::Urgent);
        assert_eq!(recs[0].message, "Sofort handeln");

        let recs = recommend(&schema(70, remediation()), &score(35));
        assert_eq!(recs[0].severity, Severity::Advisory);
    }

    #[test]
    fn missing_remediation_text_falls_back_to_label() {
        let recs = recommend(&schema(70, None), &score(10));
        assert_eq!(recs[0].message, "Zutritt: Hier besteht Verbesserungsbedarf.");
    }

    #[test]
    fn closing_recommendations_always_appended_last() {
        let recs = recommend(&schema(70, remediation()), &score(0));
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].message, "Lassen Sie sich beraten.");
        assert!(recs[1].category.is_none());
    }
}
