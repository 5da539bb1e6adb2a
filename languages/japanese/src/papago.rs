use async_trait::async_trait;
use kotoba_core::links::encode_component;
use kotoba_core::{LookupError, SimpleSearch};

use crate::http::fetch_json;

const PROVIDER: &str = "papago";

/// Papago bilingual dictionary search (Japanese to Korean)
#[derive(Clone)]
pub struct PapagoClient {
    client: reqwest::Client,
    api_url: String,
}

impl PapagoClient {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl SimpleSearch for PapagoClient {
    async fn simple_search(&self, text: &str) -> Result<serde_json::Value, LookupError> {
        if text.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let url = format!(
            "{}/apis/dictionary/search?source=ja&target=ko&text={}&locale=ko",
            self.api_url,
            encode_component(text)
        );

        let request = self
            .client
            .get(url)
            .header("accept", "application/json")
            .header("x-apigw-partnerid", "papago");

        fetch_json(PROVIDER, request).await
    }
}
