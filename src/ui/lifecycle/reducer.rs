//! Reducer for the fetch lifecycle.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::GenerationIntent;
use super::state::GenerationState;

/// Reducer for [`GenerationState`] transitions.
///
/// Only `Idle -> Loading`, `Loading -> Success` and `Loading -> Error` are
/// accepted. Everything else leaves the state untouched.
pub struct GenerationReducer<T>(PhantomData<T>);

impl<T> Reducer for GenerationReducer<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    type State = GenerationState<T>;
    type Intent = GenerationIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (GenerationState::Idle, GenerationIntent::Start) => GenerationState::Loading,
            (GenerationState::Loading, GenerationIntent::Resolved(data)) => {
                GenerationState::Success(data)
            }
            (GenerationState::Loading, GenerationIntent::Failed { message }) => {
                GenerationState::Error { message }
            }
            (other, _) => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type R = GenerationReducer<Vec<String>>;

    #[test]
    fn start_moves_idle_to_loading() {
        let state = R::reduce(GenerationState::Idle, GenerationIntent::Start);
        assert_eq!(state, GenerationState::Loading);
    }

    #[test]
    fn resolved_moves_loading_to_success() {
        let state = R::reduce(
            GenerationState::Loading,
            GenerationIntent::Resolved(vec!["Socrates".into()]),
        );
        assert_eq!(state, GenerationState::Success(vec!["Socrates".into()]));
    }

    #[test]
    fn failed_moves_loading_to_error() {
        let state = R::reduce(
            GenerationState::Loading,
            GenerationIntent::Failed {
                message: "Failed".into(),
            },
        );
        assert_eq!(
            state,
            GenerationState::Error {
                message: "Failed".into()
            }
        );
    }

    #[test]
    fn success_is_terminal() {
        let success = GenerationState::Success(vec!["a".to_string()]);
        for intent in [
            GenerationIntent::Start,
            GenerationIntent::Resolved(vec!["b".to_string()]),
            GenerationIntent::Failed {
                message: "late".into(),
            },
        ] {
            assert_eq!(R::reduce(success.clone(), intent), success);
        }
    }

    #[test]
    fn error_is_terminal() {
        let error = GenerationState::<Vec<String>>::Error {
            message: "x".into(),
        };
        let state = R::reduce(error.clone(), GenerationIntent::Resolved(vec![]));
        assert_eq!(state, error);
        let state = R::reduce(error.clone(), GenerationIntent::Start);
        assert_eq!(state, error);
    }

    #[test]
    fn results_before_start_are_ignored() {
        let state = R::reduce(GenerationState::Idle, GenerationIntent::Resolved(vec![]));
        assert_eq!(state, GenerationState::Idle);
    }

    #[test]
    fn dispatch_updates_in_place() {
        let mut slot = GenerationState::Idle;
        R::dispatch(&mut slot, GenerationIntent::Start);
        R::dispatch(&mut slot, GenerationIntent::Resolved(vec!["Hume".into()]));
        assert_eq!(slot.data().map(Vec::len), Some(1));
    }
}
