#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{provider} returned HTTP {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("Failed to parse {provider} response: {message}")]
    Parse {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} did not answer within {after_ms}ms")]
    Timeout { provider: &'static str, after_ms: u64 },

    #[error("Query is empty")]
    EmptyQuery,
}

impl LookupError {
    pub fn parse(provider: &'static str, message: impl ToString) -> Self {
        Self::Parse {
            provider,
            message: message.to_string(),
        }
    }
}
