use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use kotoba_types::{KanjiMap, KanjiResult, LookupSlot, SearchResults, SlotFailure};

use crate::error::LookupError;
use crate::kanji::distinct_kanji;
use crate::links::dictionary_link;
use crate::lookup::{DictionaryLookup, JishoLookup};

/// Fans one query out to every lookup and merges the answers
#[derive(Clone)]
pub struct SearchOrchestrator {
    jisho: Arc<dyn JishoLookup>,
    dictionary: Arc<dyn DictionaryLookup>,
    timeout: Duration,
}

impl SearchOrchestrator {
    pub fn new(
        jisho: Arc<dyn JishoLookup>,
        dictionary: Arc<dyn DictionaryLookup>,
        timeout: Duration,
    ) -> Self {
        Self {
            jisho,
            dictionary,
            timeout,
        }
    }

    /// Run a full orchestration pass.
    ///
    /// Returns `None` for an empty query without touching the network.
    /// Every lookup settles before this returns; a failed lookup leaves its
    /// slot empty and is recorded in `failures`.
    pub async fn search(&self, query: &str) -> Option<SearchResults> {
        if query.trim().is_empty() {
            return None;
        }

        let kanji = distinct_kanji(query);
        tracing::debug!(query, kanji = kanji.len(), "Dispatching lookups");

        let kanji_lookups = kanji.into_iter().map(|c| async move {
            let key = c.to_string();
            let result = self.bounded("jisho kanji", self.jisho.lookup_kanji(&key)).await;
            (key, result)
        });

        let (phrase, dictionary, examples, kanji_settled) = tokio::join!(
            self.bounded("jisho phrase", self.jisho.lookup_phrase(query)),
            self.bounded("daum", self.dictionary.lookup_dictionary(query)),
            self.bounded("jisho examples", self.jisho.lookup_examples(query)),
            join_all(kanji_lookups),
        );

        let mut failures = Vec::new();
        let phrase_result = settle(query, LookupSlot::Phrase, phrase, &mut failures);
        let dictionary_result = settle(query, LookupSlot::Dictionary, dictionary, &mut failures);
        let example_result = settle(query, LookupSlot::Examples, examples, &mut failures);

        let mut kanji_results = KanjiMap::with_capacity(kanji_settled.len());
        for (key, result) in kanji_settled {
            match result {
                Ok(details) => {
                    let dictionary_link = dictionary_link(&key);
                    kanji_results.insert(
                        key,
                        KanjiResult {
                            details,
                            dictionary_link,
                        },
                    );
                }
                Err(e) => {
                    tracing::warn!(query, kanji = %key, "Kanji lookup failed: {e}");
                    failures.push(SlotFailure {
                        slot: LookupSlot::Kanji,
                        character: Some(key),
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            query,
            kanji = kanji_results.len(),
            failed = failures.len(),
            "Search settled"
        );

        Some(SearchResults {
            query: query.to_string(),
            phrase_result,
            dictionary_result,
            example_result,
            kanji_results,
            failures,
        })
    }

    async fn bounded<T>(
        &self,
        provider: &'static str,
        lookup: impl Future<Output = Result<T, LookupError>>,
    ) -> Result<T, LookupError> {
        tokio::time::timeout(self.timeout, lookup)
            .await
            .unwrap_or_else(|_| {
                Err(LookupError::Timeout {
                    provider,
                    after_ms: self.timeout.as_millis() as u64,
                })
            })
    }
}

fn settle<T>(
    query: &str,
    slot: LookupSlot,
    result: Result<T, LookupError>,
    failures: &mut Vec<SlotFailure>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(query, ?slot, "Lookup failed: {e}");
            failures.push(SlotFailure {
                slot,
                character: None,
                message: e.to_string(),
            });
            None
        }
    }
}
