//! Intents for the fetch lifecycle.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to a [`GenerationReducer`](super::GenerationReducer).
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationIntent<T> {
    /// A fetch was issued for this screen.
    Start,

    /// The fetch returned valid data.
    Resolved(T),

    /// The fetch failed. `message` is the user-facing text.
    Failed { message: String },
}

impl<T: Send + 'static> Intent for GenerationIntent<T> {}
