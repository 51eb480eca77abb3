//! Axum router configuration for advisor endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    advise_stain, calculate_winter_service, estimate_decluttering, get_assessment, health,
    list_tools, recommend_deicer, score_assessment, share_result, AdvisorAppState,
};

/// Create the advisor API router.
///
/// # Routes
///
/// ## Discovery
/// - `GET /tools` - List every tool
/// - `GET /assessments/:tool_id` - Assessment schema
///
/// ## Calculators
/// - `POST /assessments/:tool_id/score` - Score answers
/// - `POST /decluttering/estimate` - Decluttering price range
/// - `POST /winter-service/calculate` - DIY vs. contractor
/// - `POST /deicing/recommend` - De-icing agent ranking
/// - `POST /stains/advise` - Stain-removal instructions
///
/// ## Sharing
/// - `POST /share` - Share a result link or copy it
pub fn advisor_routes() -> Router<AdvisorAppState> {
    Router::new()
        // Discovery
        .route("/tools", get(list_tools))
        .route("/assessments/:tool_id", get(get_assessment))
        // Calculators
        .route("/assessments/:tool_id/score", post(score_assessment))
        .route("/decluttering/estimate", post(estimate_decluttering))
        .route("/winter-service/calculate", post(calculate_winter_service))
        .route("/deicing/recommend", post(recommend_deicer))
        .route("/stains/advise", post(advise_stain))
        // Sharing
        .route("/share", post(share_result))
}

/// Create the complete advisor module router.
///
/// Mounts the API under `/api` and adds `GET /health`.
///
/// # Example
///
/// ```ignore
/// use facility_advisor::adapters::http::advisor::{advisor_router, AdvisorAppState};
///
/// let state = AdvisorAppState::new(catalog, delay);
/// let app = advisor_router().with_state(state);
/// ```
pub fn advisor_router() -> Router<AdvisorAppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", advisor_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::catalog::EmbeddedCatalog;
    use crate::adapters::delay::NoDelay;

    fn app() -> Router {
        let catalog = Arc::new(EmbeddedCatalog::catalog().unwrap());
        advisor_router().with_state(AdvisorAppState::new(catalog, Arc::new(NoDelay)))
    }

    #[tokio::test]
    async fn health_reports_tool_count() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["tools"], 6);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = app()
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
