use kotoba_types::{DictionaryResult, ExampleSearchResult, JishoResult, KanjiDetails, SuggestionItem};

use crate::error::LookupError;

/// Phrase, kanji and example-sentence lookup service
#[async_trait::async_trait]
pub trait JishoLookup: Send + Sync {
    /// Word/reading pairs and senses for a search string
    async fn lookup_phrase(&self, phrase: &str) -> Result<JishoResult, LookupError>;

    /// Meaning, readings and stroke order of a single kanji
    async fn lookup_kanji(&self, kanji: &str) -> Result<KanjiDetails, LookupError>;

    /// Example sentences containing the phrase
    async fn lookup_examples(&self, phrase: &str) -> Result<ExampleSearchResult, LookupError>;
}

/// Scraped bilingual dictionary
#[async_trait::async_trait]
pub trait DictionaryLookup: Send + Sync {
    async fn lookup_dictionary(&self, query: &str) -> Result<DictionaryResult, LookupError>;
}

/// Autocomplete provider
#[async_trait::async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self, partial: &str) -> Result<Vec<SuggestionItem>, LookupError>;
}

/// Phrase translation endpoint whose JSON is handed through untouched
#[async_trait::async_trait]
pub trait SimpleSearch: Send + Sync {
    async fn simple_search(&self, text: &str) -> Result<serde_json::Value, LookupError>;
}
