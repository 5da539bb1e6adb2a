//! Naver Japanese-Korean autocomplete

use async_trait::async_trait;
use kotoba_core::links::encode_component;
use kotoba_core::{LookupError, SuggestionSource};
use kotoba_types::SuggestionItem;
use serde_json::Value;

use crate::http::fetch_json;

const PROVIDER: &str = "naver";

#[derive(Clone)]
pub struct NaverSuggestClient {
    client: reqwest::Client,
    base_url: String,
}

impl NaverSuggestClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn suggest_url(&self, partial: &str) -> String {
        format!(
            "{}/jako/ac?n_katahira=0&st=11&r_lt=11&q={}",
            self.base_url,
            encode_component(partial)
        )
    }
}

#[async_trait]
impl SuggestionSource for NaverSuggestClient {
    async fn suggest(&self, partial: &str) -> Result<Vec<SuggestionItem>, LookupError> {
        if partial.trim().is_empty() {
            return Ok(vec![]);
        }

        let payload: Value = fetch_json(PROVIDER, self.client.get(self.suggest_url(partial))).await?;
        Ok(parse_suggestions(&payload))
    }
}

/// Flatten the primary bucket followed by the related bucket.
///
/// Candidates are `[[reading], [word], [..], [meaning], ..]`; shorter ones are
/// skipped.
pub fn parse_suggestions(payload: &Value) -> Vec<SuggestionItem> {
    let Some(buckets) = payload.get("items").and_then(Value::as_array) else {
        return vec![];
    };

    buckets
        .iter()
        .take(2)
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(parse_candidate)
        .collect()
}

fn parse_candidate(candidate: &Value) -> Option<SuggestionItem> {
    let fields = candidate.as_array().filter(|fields| fields.len() >= 4)?;
    let head = |index: usize| {
        fields[index]
            .get(0)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Some(SuggestionItem {
        reading: head(0),
        word: head(1),
        meaning: head(3),
    })
}
