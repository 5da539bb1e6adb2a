//! Canned upstream services for route tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kotoba_config::Config;
use kotoba_core::{DictionaryLookup, JishoLookup, LookupError, SimpleSearch, SuggestionSource};
use kotoba_types::{
    DictionaryResult, ExampleResult, ExampleSearchResult, JapaneseWord, JishoEntry, JishoResult,
    KanjiDetails, SuggestionItem, WordInfo,
};
use serde_json::{Value, json};

use crate::state::{AppState, Services};

fn unavailable(provider: &'static str) -> LookupError {
    LookupError::Status {
        provider,
        status: 503,
    }
}

/// Every provider either answers with canned data or fails with a 503
#[derive(Clone, Copy, Default)]
pub struct Upstream {
    pub down: bool,
    /// Latency of the phrase lookup
    pub delay: Duration,
}

#[async_trait]
impl JishoLookup for Upstream {
    async fn lookup_phrase(&self, phrase: &str) -> Result<JishoResult, LookupError> {
        tokio::time::sleep(self.delay).await;
        if self.down {
            return Err(unavailable("jisho"));
        }
        Ok(JishoResult {
            data: vec![JishoEntry {
                japanese: vec![JapaneseWord {
                    word: Some(phrase.to_string()),
                    reading: Some("にほんご".to_string()),
                }],
                senses: vec![],
            }],
        })
    }

    async fn lookup_kanji(&self, kanji: &str) -> Result<KanjiDetails, LookupError> {
        if self.down {
            return Err(unavailable("jisho"));
        }
        Ok(KanjiDetails {
            found: true,
            meaning: Some(format!("meaning of {kanji}")),
            ..KanjiDetails::default()
        })
    }

    async fn lookup_examples(&self, phrase: &str) -> Result<ExampleSearchResult, LookupError> {
        if self.down {
            return Err(unavailable("jisho"));
        }
        Ok(ExampleSearchResult {
            uri: format!("https://jisho.org/search/{phrase}%23sentences"),
            results: vec![ExampleResult {
                kanji: format!("{phrase}を話す"),
                english: "I speak it.".to_string(),
                ..ExampleResult::default()
            }],
        })
    }
}

#[async_trait]
impl DictionaryLookup for Upstream {
    async fn lookup_dictionary(&self, query: &str) -> Result<DictionaryResult, LookupError> {
        if self.down {
            return Err(unavailable("daum"));
        }
        Ok(DictionaryResult {
            main_word: WordInfo {
                word: query.to_string(),
                word_with_kanji: String::new(),
                meanings: vec!["일본어".to_string()],
            },
            sub_words: vec![],
            dictionary_link: "https://dic.daum.net/search.do?dic=jp".to_string(),
        })
    }
}

#[async_trait]
impl SuggestionSource for Upstream {
    async fn suggest(&self, partial: &str) -> Result<Vec<SuggestionItem>, LookupError> {
        if self.down {
            return Err(unavailable("naver"));
        }
        Ok(vec![SuggestionItem {
            word: format!("{partial}る"),
            reading: "たべる".to_string(),
            meaning: "먹다".to_string(),
        }])
    }
}

#[async_trait]
impl SimpleSearch for Upstream {
    async fn simple_search(&self, text: &str) -> Result<Value, LookupError> {
        if self.down {
            return Err(unavailable("papago"));
        }
        Ok(json!({ "items": [{ "entry": text, "pos": [] }], "extra": 1 }))
    }
}

pub fn app_state(upstream: Upstream) -> Arc<AppState> {
    let upstream = Arc::new(upstream);
    let services = Services {
        jisho: upstream.clone(),
        dictionary: upstream.clone(),
        suggestions: upstream.clone(),
        simple_search: upstream,
    };
    Arc::new(AppState::new(Config::default(), services))
}
