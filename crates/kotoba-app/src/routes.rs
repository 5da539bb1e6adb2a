use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use kotoba_types::SuggestionItem;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

type SharedState = Arc<AppState>;

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub query: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl QueryParams {
    fn required_query(&self) -> Result<&str, ApiError> {
        self.query
            .as_deref()
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ApiError::bad_request("Query parameter is required"))
    }
}

#[derive(Debug, Deserialize)]
pub struct TextParams {
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsPayload {
    pub suggestions: Vec<SuggestionItem>,
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// `type=kanji|examples`, anything else is a phrase search
pub async fn jisho(
    State(state): State<SharedState>,
    Query(params): Query<QueryParams>,
) -> Result<Response, ApiError> {
    let query = params.required_query()?;

    let result = match params.kind.as_deref() {
        Some("kanji") => state.jisho.lookup_kanji(query).await.map(|r| Json(r).into_response()),
        Some("examples") => state
            .jisho
            .lookup_examples(query)
            .await
            .map(|r| Json(r).into_response()),
        _ => state.jisho.lookup_phrase(query).await.map(|r| Json(r).into_response()),
    };

    result.map_err(|e| {
        tracing::error!(query, kind = ?params.kind, "Error in Jisho API: {e}");
        ApiError::upstream("Failed to fetch data from Jisho")
    })
}

pub async fn daum_dict(
    State(state): State<SharedState>,
    Query(params): Query<QueryParams>,
) -> Result<Response, ApiError> {
    let query = params.required_query()?;

    match state.dictionary.lookup_dictionary(query).await {
        Ok(result) => Ok(Json(result).into_response()),
        Err(e) => {
            tracing::error!(query, "Error fetching dictionary data: {e}");
            Err(ApiError::upstream("Failed to fetch dictionary data").with_details(e))
        }
    }
}

/// Always 200; failures come back as an empty list
pub async fn naver_suggest(
    State(state): State<SharedState>,
    Query(params): Query<QueryParams>,
) -> Json<SuggestionsPayload> {
    let suggestions = match params.query.as_deref() {
        Some(query) => state.suggestions.fetch_suggestions(query).await,
        None => vec![],
    };
    Json(SuggestionsPayload { suggestions })
}

pub async fn simple_search(
    State(state): State<SharedState>,
    Query(params): Query<TextParams>,
) -> Result<Response, ApiError> {
    let text = params
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("Text parameter is required"))?;

    match state.simple_search.simple_search(text).await {
        Ok(raw) => Ok(Json(raw).into_response()),
        Err(e) => {
            tracing::error!(text, "Simple search failed: {e}");
            Err(ApiError::upstream("Simple search failed"))
        }
    }
}

/// Aggregated search: every lookup in one response
pub async fn search(
    State(state): State<SharedState>,
    Query(params): Query<QueryParams>,
) -> Result<Response, ApiError> {
    let query = params.required_query()?;

    state
        .orchestrator
        .search(query)
        .await
        .map(|results| Json(results).into_response())
        .ok_or_else(|| ApiError::bad_request("Query parameter is required"))
}
