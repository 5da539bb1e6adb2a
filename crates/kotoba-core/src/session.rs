use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use kotoba_types::{
    SearchResults, SessionEvent, SessionUpdate, SimpleSearchApiResponse, SuggestionItem,
};

use crate::debounce::Debouncer;
use crate::generation::{RequestGeneration, Ticket};
use crate::lookup::SimpleSearch;
use crate::preprocess::normalize_query;
use crate::search::SearchOrchestrator;
use crate::suggest::SuggestionFetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PivotState {
    Idle,
    Searching,
    Settled,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session channel closed")]
    ChannelClosed,
}

/// Everything the session loop reacts to: user events and finished requests
enum Inbox {
    Event(SessionEvent),
    DebounceElapsed(String),
    SuggestionsReady {
        ticket: Ticket,
        input: String,
        items: Vec<SuggestionItem>,
    },
    SearchDone {
        ticket: Ticket,
        results: Option<SearchResults>,
    },
    DragDone {
        ticket: Ticket,
        text: String,
        response: SimpleSearchApiResponse,
    },
}

/// Sending side of a running [`SearchSession`]
#[derive(Clone)]
pub struct SessionHandle {
    inbox: AsyncSender<Inbox>,
}

impl SessionHandle {
    pub async fn send(&self, event: SessionEvent) -> Result<(), SessionError> {
        self.inbox
            .send(Inbox::Event(event))
            .await
            .map_err(|_| SessionError::ChannelClosed)
    }
}

/// Query-pivot state machine.
///
/// Every trigger restarts a full orchestration pass; responses of superseded
/// queries, inputs or selections are dropped on arrival.
pub struct SearchSession {
    orchestrator: Arc<SearchOrchestrator>,
    suggestions: Arc<SuggestionFetcher>,
    simple_search: Option<Arc<dyn SimpleSearch>>,
    debounce: Duration,

    state: PivotState,
    /// Shutdown arrived while a search was in flight
    closing: bool,
    input: String,
    query: String,

    suggestion_generation: Arc<RequestGeneration>,
    search_generation: Arc<RequestGeneration>,
    drag_generation: Arc<RequestGeneration>,

    inbox_tx: AsyncSender<Inbox>,
    inbox_rx: AsyncReceiver<Inbox>,
    updates: AsyncSender<SessionUpdate>,
}

impl SearchSession {
    pub fn new(
        orchestrator: Arc<SearchOrchestrator>,
        suggestions: Arc<SuggestionFetcher>,
        simple_search: Option<Arc<dyn SimpleSearch>>,
        debounce: Duration,
    ) -> (Self, SessionHandle, AsyncReceiver<SessionUpdate>) {
        let (inbox_tx, inbox_rx) = kanal::unbounded_async();
        let (updates, updates_rx) = kanal::unbounded_async();

        let session = Self {
            orchestrator,
            suggestions,
            simple_search,
            debounce,
            state: PivotState::Idle,
            closing: false,
            input: String::new(),
            query: String::new(),
            suggestion_generation: Arc::new(RequestGeneration::new()),
            search_generation: Arc::new(RequestGeneration::new()),
            drag_generation: Arc::new(RequestGeneration::new()),
            inbox_tx: inbox_tx.clone(),
            inbox_rx,
            updates,
        };

        (session, SessionHandle { inbox: inbox_tx }, updates_rx)
    }

    /// Session main loop, returns on `SessionEvent::Shutdown`.
    ///
    /// A search still in flight at shutdown settles and is emitted first.
    pub async fn run(mut self) -> Result<(), SessionError> {
        let mut debouncer = Debouncer::new(self.debounce, self.inbox_tx.clone());

        tracing::info!("[SESSION] Waiting for events");
        loop {
            let message = self
                .inbox_rx
                .recv()
                .await
                .map_err(|_| SessionError::ChannelClosed)?;

            match message {
                Inbox::Event(SessionEvent::Shutdown) => {
                    debouncer.cancel_pending();
                    if self.state == PivotState::Searching {
                        tracing::info!("[SESSION] Shutdown requested, letting the search settle");
                        self.closing = true;
                        continue;
                    }
                    tracing::info!("[SESSION] Shutdown requested");
                    return Ok(());
                }
                Inbox::Event(_) if self.closing => {}
                Inbox::Event(event) => self.handle_event(event, &mut debouncer).await?,
                Inbox::DebounceElapsed(input) => self.dispatch_suggestions(input),
                Inbox::SuggestionsReady {
                    ticket,
                    input,
                    items,
                } => {
                    if !self.suggestion_generation.is_current(ticket) || input != self.input {
                        tracing::debug!(input, "Dropping stale suggestions");
                        continue;
                    }
                    self.emit(SessionUpdate::Suggestions { input, items }).await?;
                }
                Inbox::SearchDone { ticket, results } => {
                    if !self.search_generation.is_current(ticket) {
                        tracing::debug!("Dropping results of superseded query");
                        continue;
                    }
                    self.state = PivotState::Settled;
                    if let Some(results) = results {
                        self.emit(SessionUpdate::SearchSettled(Box::new(results)))
                            .await?;
                    }
                    if self.closing {
                        tracing::info!("[SESSION] Search settled, stopping");
                        return Ok(());
                    }
                }
                Inbox::DragDone {
                    ticket,
                    text,
                    response,
                } => {
                    if self.drag_generation.is_current(ticket) {
                        self.emit(SessionUpdate::DragResult { text, response }).await?;
                    }
                }
            }
        }
    }

    async fn handle_event(
        &mut self,
        event: SessionEvent,
        debouncer: &mut Debouncer<Inbox>,
    ) -> Result<(), SessionError> {
        match event {
            SessionEvent::InputChanged(value) => {
                self.input = value;
                // in-flight answers for older input must not land
                self.suggestion_generation.invalidate();

                if self.input.trim().is_empty() {
                    debouncer.cancel_pending();
                    self.clear_suggestions().await?;
                } else {
                    debouncer.submit(Inbox::DebounceElapsed(self.input.clone()));
                }
            }
            SessionEvent::Submit => {
                let query = self.input.clone();
                self.pivot(query, debouncer).await?;
            }
            SessionEvent::RelatedWordClicked(word) | SessionEvent::KanjiPartClicked(word) => {
                self.input = word.clone();
                self.pivot(word, debouncer).await?;
            }
            SessionEvent::SuggestionClicked(item) => {
                let query = item.pivot_query();
                self.input = query.clone();
                self.pivot(query, debouncer).await?;
            }
            SessionEvent::TextDragged(text) => self.dispatch_drag(text),
            SessionEvent::Shutdown => {}
        }

        Ok(())
    }

    /// Replace the current query and restart the search from scratch
    async fn pivot(
        &mut self,
        raw: String,
        debouncer: &mut Debouncer<Inbox>,
    ) -> Result<(), SessionError> {
        let query = normalize_query(&raw);
        if query.is_empty() {
            tracing::debug!("Ignoring empty query");
            return Ok(());
        }

        debouncer.cancel_pending();
        self.suggestion_generation.invalidate();
        self.clear_suggestions().await?;

        tracing::info!(from = %self.query, to = %query, state = ?self.state, "[SESSION] Pivot");
        self.query = query.clone();
        self.state = PivotState::Searching;
        self.emit(SessionUpdate::SearchStarted {
            query: query.clone(),
        })
        .await?;

        let ticket = self.search_generation.next();
        let orchestrator = Arc::clone(&self.orchestrator);
        let inbox = self.inbox_tx.clone();
        tokio::spawn(async move {
            let results = orchestrator.search(&query).await;
            let _ = inbox.send(Inbox::SearchDone { ticket, results }).await;
        });

        Ok(())
    }

    fn dispatch_suggestions(&mut self, input: String) {
        if input != self.input {
            return;
        }

        let ticket = self.suggestion_generation.next();
        let fetcher = Arc::clone(&self.suggestions);
        let inbox = self.inbox_tx.clone();
        tokio::spawn(async move {
            let items = fetcher.fetch_suggestions(&input).await;
            let _ = inbox
                .send(Inbox::SuggestionsReady {
                    ticket,
                    input,
                    items,
                })
                .await;
        });
    }

    fn dispatch_drag(&mut self, text: String) {
        let text = text.trim().to_string();
        if text.is_empty() {
            return;
        }
        let Some(simple_search) = self.simple_search.clone() else {
            tracing::debug!("Drag search disabled");
            return;
        };

        let ticket = self.drag_generation.next();
        let inbox = self.inbox_tx.clone();
        tokio::spawn(async move {
            let response = match simple_search.simple_search(&text).await {
                Ok(raw) => serde_json::from_value(raw).unwrap_or_else(|e| {
                    tracing::warn!(text, "Unexpected simple search payload: {e}");
                    SimpleSearchApiResponse::default()
                }),
                Err(e) => {
                    tracing::warn!(text, "Simple search failed: {e}");
                    SimpleSearchApiResponse::default()
                }
            };
            let _ = inbox
                .send(Inbox::DragDone {
                    ticket,
                    text,
                    response,
                })
                .await;
        });
    }

    async fn clear_suggestions(&self) -> Result<(), SessionError> {
        self.emit(SessionUpdate::Suggestions {
            input: self.input.clone(),
            items: vec![],
        })
        .await
    }

    async fn emit(&self, update: SessionUpdate) -> Result<(), SessionError> {
        self.updates
            .send(update)
            .await
            .map_err(|_| SessionError::ChannelClosed)
    }
}
