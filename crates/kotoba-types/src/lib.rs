pub mod events;
pub mod types;

pub use events::{SessionEvent, SessionUpdate};
pub use types::*;
