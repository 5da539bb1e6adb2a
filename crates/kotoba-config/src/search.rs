use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_debounce_ms() -> u64 {
    250
}

fn default_max_display_words() -> usize {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Idle window before a suggestion fetch is dispatched
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_max_display_words")]
    pub max_display_words: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            max_display_words: default_max_display_words(),
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            debounce_ms: env_or("DEBOUNCE_MS", default_debounce_ms()),
            max_display_words: env_or("MAX_DISPLAY_WORDS", default_max_display_words()),
        }
    }

    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
