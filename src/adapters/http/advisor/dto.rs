//! Data transfer objects for advisor HTTP endpoints.
//!
//! Request bodies use camelCase keys; they are converted into domain inputs
//! before reaching the application handlers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::advice::{DeicingAdvice, DeicingInput, StainAdvice, StainAge, StainInput};
use crate::domain::catalog::ToolDescriptor;
use crate::domain::foundation::{CategoryId, Euros, QuestionId, ValidationError};
use crate::domain::pricing::{
    DeclutteringEstimate, DeclutteringInput, DiyCosts, ProfessionalCosts, WinterServiceComparison,
    WinterServiceInput,
};
use crate::domain::schema::AssessmentSchema;
use crate::domain::scoring::ScoreResult;
use crate::domain::share::ShareOutcome;
use crate::domain::wizard::{AnswerStore, AnswerValue};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One answered question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub category: String,
    pub question: String,
    pub answer: AnswerValue,
}

/// Request to score an assessment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreAssessmentRequest {
    #[serde(default)]
    pub answers: Vec<AnswerEntry>,
}

impl ScoreAssessmentRequest {
    /// Collects the entries into an [`AnswerStore`]; later entries win.
    pub fn into_answers(self) -> Result<AnswerStore, ValidationError> {
        let mut store = AnswerStore::new();
        for entry in self.answers {
            store.set_answer(
                CategoryId::new(entry.category)?,
                QuestionId::new(entry.question)?,
                entry.answer,
            );
        }
        Ok(store)
    }
}

/// Request to estimate a decluttering job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclutteringRequest {
    /// Room type id -> count
    #[serde(default)]
    pub rooms: BTreeMap<String, u32>,
    #[serde(default)]
    pub square_meters: f64,
    pub access: Option<String>,
    pub urgency: Option<String>,
    #[serde(default)]
    pub extras: Vec<String>,
}

impl From<DeclutteringRequest> for DeclutteringInput {
    fn from(req: DeclutteringRequest) -> Self {
        DeclutteringInput {
            rooms: req.rooms,
            square_meters: req.square_meters,
            access: req.access,
            urgency: req.urgency,
            extras: req.extras,
        }
    }
}

/// Request to compare DIY winter service with a contractor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinterServiceRequest {
    /// Area to clear in m²
    #[serde(default)]
    pub area: f64,
    /// Typical snow depth in cm
    #[serde(default)]
    pub snow_depth: f64,
    /// Clearings per season
    #[serde(default)]
    pub frequency: u32,
}

impl From<WinterServiceRequest> for WinterServiceInput {
    fn from(req: WinterServiceRequest) -> Self {
        WinterServiceInput {
            area: req.area,
            snow_depth: req.snow_depth,
            frequency: req.frequency,
        }
    }
}

/// Request to rank de-icing agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeicingRequest {
    pub surface: String,
    /// Lowest expected temperature in °C
    pub temperature: f64,
    #[serde(default = "default_eco_priority")]
    pub eco_priority: u8,
    #[serde(default)]
    pub pets_or_plants: bool,
}

fn default_eco_priority() -> u8 {
    50
}

impl From<DeicingRequest> for DeicingInput {
    fn from(req: DeicingRequest) -> Self {
        DeicingInput {
            surface: req.surface,
            temperature: req.temperature,
            eco_priority: req.eco_priority,
            pets_or_plants: req.pets_or_plants,
        }
    }
}

/// Request for stain-removal instructions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StainRequest {
    pub stain: String,
    pub material: String,
    #[serde(default)]
    pub age: StainAge,
}

impl From<StainRequest> for StainInput {
    fn from(req: StainRequest) -> Self {
        StainInput {
            stain: req.stain,
            material: req.material,
            age: req.age,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub tools: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsResponse {
    pub success: bool,
    pub tools: Vec<ToolDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub success: bool,
    pub assessment: AssessmentSchema,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclutteringResponse {
    pub success: bool,
    pub estimate: DeclutteringEstimate,
}

/// Winter-service comparison in the shape the calculator page expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinterServiceResponse {
    pub success: bool,
    pub diy_results: DiyCosts,
    pub professional_results: ProfessionalCosts,
    pub cost_difference: Euros,
}

impl From<WinterServiceComparison> for WinterServiceResponse {
    fn from(comparison: WinterServiceComparison) -> Self {
        Self {
            success: true,
            diy_results: comparison.diy,
            professional_results: comparison.professional,
            cost_difference: comparison.cost_difference,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeicingResponse {
    pub success: bool,
    pub advice: DeicingAdvice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StainResponse {
    pub success: bool,
    pub advice: StainAdvice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: ShareOutcome,
}

/// Error body returned by every advisor endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            details: Some(details),
            ..Self::new(code, message)
        }
    }
}
