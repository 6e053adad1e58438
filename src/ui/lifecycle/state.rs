//! State for the fetch lifecycle.

use crate::ui::mvi::UiState;

/// Fetch progress of one screen.
///
/// Data exists only in `Success`, the message only in `Error`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// Request in flight.
    Loading,

    /// Request resolved with data.
    Success(T),

    /// Request failed; `message` is safe to show the user.
    Error { message: String },
}

impl<T: Clone + PartialEq + Send + 'static> UiState for GenerationState<T> {}

impl<T> GenerationState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Loaded data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// User-facing error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Short label for logging.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error { .. } => "error",
        }
    }
}
