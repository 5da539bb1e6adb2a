use std::sync::Arc;
use std::time::Duration;

use kotoba_types::SuggestionItem;

use crate::lookup::SuggestionSource;

/// Never-failing front of a [`SuggestionSource`]
#[derive(Clone)]
pub struct SuggestionFetcher {
    source: Arc<dyn SuggestionSource>,
    timeout: Duration,
}

impl SuggestionFetcher {
    pub fn new(source: Arc<dyn SuggestionSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Candidates for the raw input value, empty on blank input or any failure
    pub async fn fetch_suggestions(&self, partial: &str) -> Vec<SuggestionItem> {
        if partial.trim().is_empty() {
            return vec![];
        }

        match tokio::time::timeout(self.timeout, self.source.suggest(partial)).await {
            Ok(Ok(items)) => items,
            Ok(Err(e)) => {
                tracing::warn!(partial, "Suggestion fetch failed: {e}");
                vec![]
            }
            Err(_) => {
                tracing::warn!(partial, "Suggestion fetch timed out");
                vec![]
            }
        }
    }
}
