//! HTTP handlers for advisor endpoints.
//!
//! These handlers connect Axum routes to the advisor command and query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::share::InMemorySharePlatform;
use crate::application::handlers::advisor::{
    AdviseStainHandler, AdviseStainQuery, CalculateWinterServiceCommand,
    CalculateWinterServiceHandler, EstimateDeclutteringCommand, EstimateDeclutteringHandler,
    RecommendDeicerCommand, RecommendDeicerHandler, ScoreAssessmentCommand,
    ScoreAssessmentHandler, ShareResultCommand, ShareResultHandler,
};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::share::SharePayload;
use crate::ports::{CosmeticDelay, SharePlatform};

use super::dto::{
    AssessmentResponse, DeclutteringRequest, DeclutteringResponse, DeicingRequest,
    DeicingResponse, ErrorResponse, HealthResponse, ScoreAssessmentRequest, ScoreResponse,
    ShareResponse, StainRequest, StainResponse, ToolsResponse, WinterServiceRequest,
    WinterServiceResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the advisor endpoints.
///
/// Cloned per request; the catalog is immutable after startup.
#[derive(Clone)]
pub struct AdvisorAppState {
    pub catalog: Arc<Catalog>,
    pub delay: Arc<dyn CosmeticDelay>,
    pub share: Arc<dyn SharePlatform>,
    pub share_fallback_enabled: bool,
}

impl AdvisorAppState {
    /// State with a headless share platform: no native share, clipboard fallback on.
    pub fn new(catalog: Arc<Catalog>, delay: Arc<dyn CosmeticDelay>) -> Self {
        Self {
            catalog,
            delay,
            share: Arc::new(InMemorySharePlatform::new()),
            share_fallback_enabled: true,
        }
    }

    pub fn with_share(mut self, share: Arc<dyn SharePlatform>, fallback_enabled: bool) -> Self {
        self.share = share;
        self.share_fallback_enabled = fallback_enabled;
        self
    }

    pub fn score_assessment_handler(&self) -> ScoreAssessmentHandler {
        ScoreAssessmentHandler::new(self.catalog.clone(), self.delay.clone())
    }

    pub fn estimate_decluttering_handler(&self) -> EstimateDeclutteringHandler {
        EstimateDeclutteringHandler::new(self.catalog.clone(), self.delay.clone())
    }

    pub fn calculate_winter_service_handler(&self) -> CalculateWinterServiceHandler {
        CalculateWinterServiceHandler::new(self.catalog.clone(), self.delay.clone())
    }

    pub fn recommend_deicer_handler(&self) -> RecommendDeicerHandler {
        RecommendDeicerHandler::new(self.catalog.clone())
    }

    pub fn advise_stain_handler(&self) -> AdviseStainHandler {
        AdviseStainHandler::new(self.catalog.clone())
    }

    pub fn share_result_handler(&self) -> ShareResultHandler {
        ShareResultHandler::new(self.share.clone(), self.share_fallback_enabled)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health(State(state): State<AdvisorAppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        tools: state.catalog.tools().len(),
    })
}

/// GET /api/tools - List every tool with its kind
pub async fn list_tools(State(state): State<AdvisorAppState>) -> impl IntoResponse {
    Json(ToolsResponse {
        success: true,
        tools: state.catalog.tools(),
    })
}

/// GET /api/assessments/:tool_id - Schema for rendering the wizard
pub async fn get_assessment(
    State(state): State<AdvisorAppState>,
    Path(tool_id): Path<String>,
) -> Result<impl IntoResponse, AdvisorApiError> {
    let schema = state.catalog.require_assessment(&tool_id)?;
    Ok(Json(AssessmentResponse {
        success: true,
        assessment: schema.clone(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments/:tool_id/score - Score a set of answers
pub async fn score_assessment(
    State(state): State<AdvisorAppState>,
    Path(tool_id): Path<String>,
    payload: Result<Json<ScoreAssessmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AdvisorApiError> {
    let Json(request) = payload?;
    let cmd = ScoreAssessmentCommand {
        tool_id,
        answers: request.into_answers()?,
    };
    let result = state.score_assessment_handler().handle(cmd).await?;
    Ok(Json(ScoreResponse {
        success: true,
        result,
    }))
}

/// POST /api/decluttering/estimate - Price range for a decluttering job
pub async fn estimate_decluttering(
    State(state): State<AdvisorAppState>,
    payload: Result<Json<DeclutteringRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AdvisorApiError> {
    let Json(request) = payload?;
    let cmd = EstimateDeclutteringCommand {
        input: request.into(),
    };
    let estimate = state.estimate_decluttering_handler().handle(cmd).await;
    Ok(Json(DeclutteringResponse {
        success: true,
        estimate,
    }))
}

/// POST /api/winter-service/calculate - DIY vs. contractor comparison
pub async fn calculate_winter_service(
    State(state): State<AdvisorAppState>,
    payload: Result<Json<WinterServiceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AdvisorApiError> {
    let Json(request) = payload?;
    let cmd = CalculateWinterServiceCommand {
        input: request.into(),
    };
    let comparison = state.calculate_winter_service_handler().handle(cmd).await?;
    Ok(Json(WinterServiceResponse::from(comparison)))
}

/// POST /api/deicing/recommend - Rank de-icing agents
pub async fn recommend_deicer(
    State(state): State<AdvisorAppState>,
    payload: Result<Json<DeicingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AdvisorApiError> {
    let Json(request) = payload?;
    let cmd = RecommendDeicerCommand {
        input: request.into(),
    };
    let advice = state.recommend_deicer_handler().handle(cmd)?;
    Ok(Json(DeicingResponse {
        success: true,
        advice,
    }))
}

/// POST /api/stains/advise - Stain-removal instructions
pub async fn advise_stain(
    State(state): State<AdvisorAppState>,
    payload: Result<Json<StainRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AdvisorApiError> {
    let Json(request) = payload?;
    let advice = state.advise_stain_handler().handle(AdviseStainQuery {
        input: request.into(),
    });
    Ok(Json(StainResponse {
        success: true,
        advice,
    }))
}

/// POST /api/share - Share a result link, falling back to the clipboard
///
/// A failed share is still 200, reported in the body with `success: false`.
pub async fn share_result(
    State(state): State<AdvisorAppState>,
    body: Result<Json<SharePayload>, JsonRejection>,
) -> Result<impl IntoResponse, AdvisorApiError> {
    let Json(payload) = body?;
    let outcome = state
        .share_result_handler()
        .handle(ShareResultCommand { payload })
        .await;
    Ok(Json(ShareResponse {
        success: outcome.is_success(),
        outcome,
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct AdvisorApiError(DomainError);

impl From<DomainError> for AdvisorApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for AdvisorApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

/// Bodies that fail to deserialize keep the JSON error contract.
impl From<JsonRejection> for AdvisorApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::new(
            ErrorCode::ValidationFailed,
            rejection.body_text(),
        ))
    }
}

impl AdvisorApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ToolNotFound | ErrorCode::WrongToolKind => StatusCode::NOT_FOUND,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
            ErrorCode::CatalogInvalid | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AdvisorApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Advisor request failed");
        }

        let code = self.0.code.to_string();
        let body = if self.0.details.is_empty() {
            ErrorResponse::new(code, self.0.message)
        } else {
            let details = serde_json::to_value(&self.0.details).unwrap_or_default();
            ErrorResponse::with_details(code, self.0.message, details)
        };
        (status, Json(body)).into_response()
    }
}
