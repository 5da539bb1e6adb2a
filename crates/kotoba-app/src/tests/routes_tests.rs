use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::stubs::{Upstream, app_state};
use crate::server::build_router;

async fn get(upstream: Upstream, uri: &str) -> (StatusCode, Value) {
    let router = build_router(app_state(upstream));
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get(Upstream::default(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn missing_query_is_bad_request() {
    for uri in ["/api/jisho", "/api/daum-dict?query=", "/api/search"] {
        let (status, body) = get(Upstream::default(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": "Query parameter is required" }));
    }
}

#[tokio::test]
async fn jisho_dispatches_on_type() {
    let (status, body) = get(Upstream::default(), "/api/jisho?query=%E6%97%A5&type=kanji").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], json!(true));
    assert_eq!(body["meaning"], json!("meaning of 日"));

    let (_, body) = get(Upstream::default(), "/api/jisho?query=%E7%8C%AB&type=examples").await;
    assert_eq!(body["results"][0]["kanji"], json!("猫を話す"));

    let (_, body) = get(Upstream::default(), "/api/jisho?query=%E7%8C%AB&type=other").await;
    assert_eq!(body["data"][0]["japanese"][0]["word"], json!("猫"));
}

#[tokio::test]
async fn jisho_failure_is_generic_500() {
    let (status, body) = get(Upstream { down: true, ..Upstream::default() }, "/api/jisho?query=x").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch data from Jisho" }));
}

#[tokio::test]
async fn daum_failure_carries_details() {
    let (status, body) = get(Upstream { down: true, ..Upstream::default() }, "/api/daum-dict?query=x").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("Failed to fetch dictionary data"));
    assert!(body["details"].as_str().is_some_and(|d| d.contains("503")));
}

#[tokio::test]
async fn daum_result_uses_camel_case() {
    let (status, body) = get(Upstream::default(), "/api/daum-dict?query=x").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mainWord"]["meanings"], json!(["일본어"]));
    assert!(body["dictionaryLink"].is_string());
}

#[tokio::test]
async fn naver_suggest_is_always_ok() {
    let (status, body) = get(Upstream::default(), "/api/naver-suggest?query=%E9%A3%9F%E3%81%B9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"][0]["word"], json!("食べる"));

    let (status, body) = get(Upstream { down: true, ..Upstream::default() }, "/api/naver-suggest?query=x").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "suggestions": [] }));

    let (status, body) = get(Upstream::default(), "/api/naver-suggest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "suggestions": [] }));
}

#[tokio::test]
async fn simple_search_passes_json_through() {
    let (status, body) = get(Upstream::default(), "/api/simple-search?text=x").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["extra"], json!(1));

    let (status, body) = get(Upstream::default(), "/api/simple-search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Text parameter is required" }));

    let (status, body) = get(Upstream { down: true, ..Upstream::default() }, "/api/simple-search?text=x").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Simple search failed" }));
}

#[tokio::test]
async fn aggregated_search_dedupes_kanji() {
    // repeated kanji are looked up once
    let (status, body) = get(
        Upstream::default(),
        "/api/search?query=%E6%97%A5%E6%9C%AC%E6%97%A5",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let kanji: Vec<&String> = body["kanjiResults"].as_object().unwrap().keys().collect();
    assert_eq!(kanji, ["日", "本"]);
    assert_eq!(body["kanjiResults"]["本"]["found"], json!(true));
    assert_eq!(body["failures"], json!([]));
}

#[tokio::test]
async fn aggregated_search_reports_failures() {
    let (status, body) = get(Upstream { down: true, ..Upstream::default() }, "/api/search?query=%E7%8C%AB").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["phraseResult"].is_null());
    assert!(body["dictionaryResult"].is_null());
    assert!(!body["failures"].as_array().unwrap().is_empty());
}
