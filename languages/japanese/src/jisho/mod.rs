//! Jisho lookups: phrase search over the JSON API, kanji and example
//! sentences scraped from the search site.

mod kanji_page;
mod sentences;

use async_trait::async_trait;
use kotoba_core::links::encode_component;
use kotoba_core::{JishoLookup, LookupError};
use kotoba_types::{ExampleSearchResult, JishoResult, KanjiDetails};

pub use kanji_page::{parse_kanji_page, stroke_order_gif_uri};
pub use sentences::parse_example_page;

use crate::http::{fetch_json, fetch_text};

const PROVIDER: &str = "jisho";

#[derive(Clone)]
pub struct JishoClient {
    client: reqwest::Client,
    api_url: String,
    site_url: String,
}

impl JishoClient {
    pub fn new(client: reqwest::Client, api_url: String, site_url: String) -> Self {
        Self {
            client,
            api_url,
            site_url,
        }
    }

    fn phrase_url(&self, phrase: &str) -> String {
        format!(
            "{}/api/v1/search/words?keyword={}",
            self.api_url,
            encode_component(phrase)
        )
    }

    /// Search page with a `#kanji` / `#sentences` filter, hash encoded
    fn site_search_url(&self, text: &str, filter: &str) -> String {
        format!(
            "{}/search/{}%23{filter}",
            self.site_url,
            encode_component(text)
        )
    }
}

#[async_trait]
impl JishoLookup for JishoClient {
    async fn lookup_phrase(&self, phrase: &str) -> Result<JishoResult, LookupError> {
        if phrase.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let result: JishoResult =
            fetch_json(PROVIDER, self.client.get(self.phrase_url(phrase))).await?;
        tracing::debug!(phrase, entries = result.data.len(), "Jisho phrase search");
        Ok(result)
    }

    async fn lookup_kanji(&self, kanji: &str) -> Result<KanjiDetails, LookupError> {
        if kanji.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let url = self.site_search_url(kanji, "kanji");
        let html = fetch_text(PROVIDER, self.client.get(url)).await?;
        Ok(parse_kanji_page(&html, kanji))
    }

    async fn lookup_examples(&self, phrase: &str) -> Result<ExampleSearchResult, LookupError> {
        if phrase.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let url = self.site_search_url(phrase, "sentences");
        let html = fetch_text(PROVIDER, self.client.get(&url)).await?;
        let result = parse_example_page(&html, url);
        tracing::debug!(phrase, sentences = result.results.len(), "Jisho example search");
        Ok(result)
    }
}
