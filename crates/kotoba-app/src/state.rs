use std::sync::Arc;

use kanal::AsyncReceiver;
use kotoba_config::Config;
use kotoba_core::{
    DictionaryLookup, JishoLookup, SearchOrchestrator, SearchSession, SessionHandle,
    SimpleSearch, SuggestionFetcher, SuggestionSource,
};
use kotoba_lang_japanese::{
    DaumClient, JishoClient, NaverSuggestClient, PapagoClient, build_client,
};
use kotoba_types::SessionUpdate;

/// Upstream services the app talks to
pub struct Services {
    pub jisho: Arc<dyn JishoLookup>,
    pub dictionary: Arc<dyn DictionaryLookup>,
    pub suggestions: Arc<dyn SuggestionSource>,
    pub simple_search: Arc<dyn SimpleSearch>,
}

pub struct AppState {
    pub config: Config,
    pub jisho: Arc<dyn JishoLookup>,
    pub dictionary: Arc<dyn DictionaryLookup>,
    pub simple_search: Arc<dyn SimpleSearch>,
    pub suggestions: Arc<SuggestionFetcher>,
    pub orchestrator: Arc<SearchOrchestrator>,
}

impl AppState {
    pub fn new(config: Config, services: Services) -> Self {
        let timeout = config.network.request_timeout();
        let orchestrator = Arc::new(SearchOrchestrator::new(
            services.jisho.clone(),
            services.dictionary.clone(),
            timeout,
        ));
        let suggestions = Arc::new(SuggestionFetcher::new(services.suggestions, timeout));

        Self {
            config,
            jisho: services.jisho,
            dictionary: services.dictionary,
            simple_search: services.simple_search,
            suggestions,
            orchestrator,
        }
    }

    /// Real HTTP clients for every provider
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = build_client(&config.network)?;
        let upstream = &config.upstream;

        let services = Services {
            jisho: Arc::new(JishoClient::new(
                client.clone(),
                upstream.jisho_api_url.clone(),
                upstream.jisho_site_url.clone(),
            )),
            dictionary: Arc::new(DaumClient::new(client.clone(), upstream.daum_url.clone())),
            suggestions: Arc::new(NaverSuggestClient::new(
                client.clone(),
                upstream.naver_suggest_url.clone(),
            )),
            simple_search: Arc::new(PapagoClient::new(client, upstream.papago_url.clone())),
        };

        Ok(Self::new(config, services))
    }

    pub fn session(&self) -> (SearchSession, SessionHandle, AsyncReceiver<SessionUpdate>) {
        SearchSession::new(
            self.orchestrator.clone(),
            self.suggestions.clone(),
            Some(self.simple_search.clone()),
            self.config.search.debounce(),
        )
    }
}
