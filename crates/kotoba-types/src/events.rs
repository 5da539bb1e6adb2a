use crate::types::{SearchResults, SimpleSearchApiResponse, SuggestionItem};

/// Inputs of a search session
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Raw text box value changed
    InputChanged(String),
    /// Text box submitted with its current value
    Submit,
    RelatedWordClicked(String),
    /// One `·` separated part of a kanji annotation was clicked
    KanjiPartClicked(String),
    SuggestionClicked(SuggestionItem),
    /// Text selected (dragged) somewhere on the page
    TextDragged(String),
    Shutdown,
}

/// Outputs of a search session
#[derive(Debug, Clone)]
pub enum SessionUpdate {
    Suggestions {
        input: String,
        items: Vec<SuggestionItem>,
    },
    SearchStarted {
        query: String,
    },
    SearchSettled(Box<SearchResults>),
    DragResult {
        text: String,
        response: SimpleSearchApiResponse,
    },
}
