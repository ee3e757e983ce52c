use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::matching::router::search_handler;
use crate::matching::service::SmartMatchService;

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn neutral_survey() -> Value {
    json!({ "Q1": 5, "Q2": 5, "Q3": 5, "Q4": 5, "Q5": 5, "Q6": 5 })
}

fn doll_search() -> Value {
    json!({
        "child_age": 5,
        "child_gender": "female",
        "growth_goals": ["social_skills"],
        "parenting_style": "authoritative",
        "budget": { "min": 100000, "max": 200000 }
    })
}

#[tokio::test]
async fn analyze_route_returns_scores_and_dominant_styles() {
    let response = sample_router()
        .oneshot(post_json("/api/v1/parenting/analyze", neutral_survey()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["dominant_styles"],
        json!(["authoritative", "mindful", "attachment_based"])
    );
    assert_eq!(payload["scores"]["permissive"], 5.0);
}

#[tokio::test]
async fn analyze_route_rejects_incomplete_surveys() {
    let response = sample_router()
        .oneshot(post_json(
            "/api/v1/parenting/analyze",
            json!({ "Q1": 5, "Q2": 5, "Q3": 5, "Q4": 5, "Q5": 5 }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("Q6")));
}

#[tokio::test]
async fn search_route_returns_ranked_matches() {
    let response = sample_router()
        .oneshot(post_json("/api/v1/match/search", doll_search()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 1);
    assert_eq!(payload["matches"][0]["product"]["id"], "2");
    assert_eq!(payload["matches"][0]["outcome"]["total_score"], 67.5);
}

#[tokio::test]
async fn search_handler_returns_service_unavailable_without_catalog() {
    let service = Arc::new(SmartMatchService::new(Arc::new(UnavailableCatalog)));

    let response =
        search_handler::<UnavailableCatalog>(State(service), axum::Json(doll_criteria())).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn recommend_route_surfaces_catalog_outages() {
    let mut request = doll_search();
    request["answers"] = neutral_survey();

    let response = unavailable_router()
        .oneshot(post_json("/api/v1/match/recommend", request))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn recommend_route_derives_the_parenting_style() {
    let mut request = doll_search();
    request["answers"] = json!({ "Q1": 1, "Q2": 1, "Q3": 1, "Q4": 1, "Q5": 1, "Q6": 1 });
    request
        .as_object_mut()
        .expect("object payload")
        .remove("parenting_style");

    let response = sample_router()
        .oneshot(post_json("/api/v1/match/recommend", request))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["criteria"]["parenting_style"], "authoritarian");
    assert_eq!(payload["analysis"]["dominant_styles"][0], "authoritarian");
    assert_eq!(payload["matches"][0]["outcome"]["total_score"], 65.5);
}

#[tokio::test]
async fn questionnaire_route_lists_both_sections() {
    let response = sample_router()
        .oneshot(
            Request::get("/api/v1/questionnaire")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["parenting"].as_array().map(Vec::len), Some(3));
    assert_eq!(payload["personality"].as_array().map(Vec::len), Some(2));
    assert_eq!(payload["parenting"][0]["options"][0]["value"], "explain");
}

#[tokio::test]
async fn questionnaire_evaluation_route_infers_profile() {
    let response = sample_router()
        .oneshot(post_json(
            "/api/v1/questionnaire/evaluate",
            json!({
                "parenting": { "1": "ignore", "2": "few", "3": "hands_off" },
                "personality": { "1": "social", "2": "analyze" }
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["parenting_approach"], "neglectful");
    assert_eq!(
        payload["personality_traits"],
        json!(["extrovert", "analytical", "leader"])
    );
}
