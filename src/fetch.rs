// src/fetch.rs - Data-fetching state machine and stale-response guard

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{Error, Result};

/// Lifecycle of one fetched value: `Idle -> Loading -> Success | Error`.
/// Re-running a fetch restarts the same transitions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    /// Converts a settled request into the terminal state. Failures become
    /// the user-facing message (the backend `detail` when there was one).
    pub fn settle(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err.user_message().to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T>> for FetchState<T> {
    fn from(result: Result<T>) -> Self {
        Self::settle(result)
    }
}

/// Issues monotonically increasing request tokens so that only the most
/// recently started request may commit its result. Without this, a slow
/// response issued under old filter values could overwrite the state of a
/// newer request.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, making every previously issued token stale.
    pub fn begin(&self) -> RequestToken {
        let number = self.latest.get() + 1;
        self.latest.set(number);
        RequestToken {
            latest: Rc::clone(&self.latest),
            number,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestToken {
    latest: Rc<Cell<u64>>,
    number: u64,
}

impl RequestToken {
    /// Whether this token still belongs to the newest request.
    pub fn is_current(&self) -> bool {
        self.latest.get() == self.number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let mut state: FetchState<Vec<u8>> = FetchState::Idle;
        assert!(!state.is_loading());

        state = FetchState::Loading;
        assert!(state.is_loading());
        assert_eq!(state.data(), None);

        state = FetchState::settle(Ok(vec![1, 2]));
        assert_eq!(state.data(), Some(&vec![1, 2]));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_error_keeps_detail_message() {
        let state: FetchState<()> = FetchState::settle(Err(Error::api(
            400,
            "/products",
            "Invalid status",
        )));
        assert_eq!(state.error(), Some("Invalid status"));
    }

    #[test]
    fn test_newer_request_invalidates_older_token() {
        let sequence = RequestSequence::new();

        let first = sequence.begin();
        assert!(first.is_current());

        let second = sequence.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_stale_response_is_not_committed() {
        let sequence = RequestSequence::new();
        let mut state: FetchState<&str> = FetchState::Loading;

        let slow = sequence.begin();
        let fast = sequence.begin();

        // The fast (newer) request settles first.
        if fast.is_current() {
            state = FetchState::Success("fresh");
        }
        // The slow response arrives afterwards and must be dropped.
        if slow.is_current() {
            state = FetchState::Success("stale");
        }

        assert_eq!(state.data(), Some(&"fresh"));
    }
}
