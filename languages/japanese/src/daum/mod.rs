//! Daum dictionary: HTML search page fetch and normalization

mod normalizer;

use async_trait::async_trait;
use kotoba_core::links::encode_component;
use kotoba_core::{DictionaryLookup, LookupError};
use kotoba_types::DictionaryResult;

pub use normalizer::normalize;

use crate::http::fetch_text;

const PROVIDER: &str = "daum";

#[derive(Clone)]
pub struct DaumClient {
    client: reqwest::Client,
    base_url: String,
}

impl DaumClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search.do?q={}&dic=jp",
            self.base_url,
            encode_component(query)
        )
    }
}

#[async_trait]
impl DictionaryLookup for DaumClient {
    async fn lookup_dictionary(&self, query: &str) -> Result<DictionaryResult, LookupError> {
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let html = fetch_text(PROVIDER, self.client.get(self.search_url(query))).await?;
        let result = normalize(&html, query);
        tracing::debug!(
            query,
            meanings = result.main_word.meanings.len(),
            sub_words = result.sub_words.len(),
            "Daum page normalized"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn fetches_and_normalizes_search_page() {
        let mut server = Server::new_async().await;
        let page = server
            .mock("GET", "/search.do")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "猫".into()),
                Matcher::UrlEncoded("dic".into(), "jp".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(
                r#"<div class="search_cleanword"><a class="txt_cleansch">ねこ</a><span class="sub_read">猫</span></div>
                   <ul class="list_search"><li><span class="txt_search">고양이</span></li></ul>"#,
            )
            .create_async()
            .await;

        let client = DaumClient::new(reqwest::Client::new(), server.url());
        let result = client.lookup_dictionary("猫").await.unwrap();

        page.assert_async().await;
        assert_eq!(result.main_word.word, "ねこ");
        assert_eq!(result.main_word.word_with_kanji, "猫");
        assert_eq!(result.main_word.meanings, vec!["고양이"]);
        assert_eq!(
            result.dictionary_link,
            "https://dic.daum.net/search.do?q=%E7%8C%AB&dic=jp"
        );
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/search.do")
            .match_query(Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let client = DaumClient::new(reqwest::Client::new(), server.url());
        let err = client.lookup_dictionary("猫").await.unwrap_err();
        assert!(matches!(err, LookupError::Status { status: 502, .. }));
    }
}
