use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::catalog::CatalogProvider;
use super::domain::SmartSearchCriteria;
use super::engine::ProductMatch;
use super::service::{MatchServiceError, RecommendationRequest, SmartMatchService};
use super::survey::{QuestionnaireAnswers, SurveyAnswers};

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub total: usize,
    pub matches: Vec<ProductMatch>,
}

/// Router builder exposing the survey and matching endpoints.
pub fn matching_router<C>(service: Arc<SmartMatchService<C>>) -> Router
where
    C: CatalogProvider + 'static,
{
    Router::new()
        .route("/api/v1/parenting/analyze", post(analyze_handler::<C>))
        .route("/api/v1/questionnaire", get(questionnaire_handler::<C>))
        .route(
            "/api/v1/questionnaire/evaluate",
            post(evaluate_questionnaire_handler::<C>),
        )
        .route("/api/v1/match/search", post(search_handler::<C>))
        .route("/api/v1/match/recommend", post(recommend_handler::<C>))
        .with_state(service)
}

fn error_response(error: MatchServiceError) -> Response {
    let status = match &error {
        MatchServiceError::Survey(_) => StatusCode::UNPROCESSABLE_ENTITY,
        MatchServiceError::Catalog(_) => {
            warn!(%error, "catalog unavailable for smart search");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn analyze_handler<C>(
    State(service): State<Arc<SmartMatchService<C>>>,
    axum::Json(answers): axum::Json<SurveyAnswers>,
) -> Response
where
    C: CatalogProvider + 'static,
{
    match service.analyze(&answers) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn questionnaire_handler<C>(
    State(service): State<Arc<SmartMatchService<C>>>,
) -> Response
where
    C: CatalogProvider + 'static,
{
    (StatusCode::OK, axum::Json(service.questionnaire().clone())).into_response()
}

pub(crate) async fn evaluate_questionnaire_handler<C>(
    State(service): State<Arc<SmartMatchService<C>>>,
    axum::Json(answers): axum::Json<QuestionnaireAnswers>,
) -> Response
where
    C: CatalogProvider + 'static,
{
    let outcome = service.evaluate_questionnaire(&answers);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn search_handler<C>(
    State(service): State<Arc<SmartMatchService<C>>>,
    axum::Json(criteria): axum::Json<SmartSearchCriteria>,
) -> Response
where
    C: CatalogProvider + 'static,
{
    match service.search(&criteria) {
        Ok(matches) => {
            let body = SearchResponse {
                total: matches.len(),
                matches,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommend_handler<C>(
    State(service): State<Arc<SmartMatchService<C>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    C: CatalogProvider + 'static,
{
    match service.recommend(request) {
        Ok(recommendation) => (StatusCode::OK, axum::Json(recommendation)).into_response(),
        Err(error) => error_response(error),
    }
}
