//! Error types for content fetching.

use thiserror::Error;

/// Diagnostic cause of a failed content fetch.
///
/// Never shown to the user; screens display [`ScreenError::user_message`].
#[derive(Debug, Error)]
pub enum ContentFetchError {
    /// No API key available.
    #[error("Content service not configured: {reason}")]
    NotConfigured { reason: String },

    /// Request could not be sent or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service returned a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Body was not a `generateContent` response.
    #[error("Invalid response envelope: {0}")]
    InvalidEnvelope(String),

    /// Response carried no candidate text.
    #[error("Empty response from content service")]
    EmptyResponse,

    /// Candidate text did not match the requested schema.
    #[error("Response does not match the expected shape: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Failure of a screen-level fetch.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("Failed to load philosopher list: {0}")]
    ListFetch(#[source] ContentFetchError),

    #[error("Failed to load details for '{name}': {source}")]
    DetailFetch {
        name: String,
        #[source]
        source: ContentFetchError,
    },
}

pub const LIST_FETCH_MESSAGE: &str = "Failed to load the great minds. Please try again later.";
pub const DETAIL_FETCH_MESSAGE: &str = "Failed to commune with the spirits of wisdom.";

impl ScreenError {
    /// User-facing message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            ScreenError::ListFetch(_) => LIST_FETCH_MESSAGE,
            ScreenError::DetailFetch { .. } => DETAIL_FETCH_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_hide_the_cause() {
        let list = ScreenError::ListFetch(ContentFetchError::EmptyResponse);
        assert_eq!(list.user_message(), LIST_FETCH_MESSAGE);
        assert!(!list.user_message().contains("Empty"));

        let detail = ScreenError::DetailFetch {
            name: "Socrates".into(),
            source: ContentFetchError::Api {
                status: 500,
                message: "boom".into(),
            },
        };
        assert_eq!(detail.user_message(), DETAIL_FETCH_MESSAGE);
        assert!(detail.to_string().contains("Socrates"));
        assert!(detail.to_string().contains("boom"));
    }
}
