pub mod debounce;
pub mod error;
pub mod generation;
pub mod kanji;
pub mod links;
pub mod lookup;
pub mod preprocess;
pub mod search;
pub mod session;
pub mod suggest;


pub use error::LookupError;
pub use lookup::{DictionaryLookup, JishoLookup, SimpleSearch, SuggestionSource};
pub use search::SearchOrchestrator;
pub use session::{SearchSession, SessionError, SessionHandle};
pub use suggest::SuggestionFetcher;
