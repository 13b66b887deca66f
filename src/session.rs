//! Submission lifecycle.
//!
//! Exactly one request may be in flight. The state machine gates which
//! surface is visible (form, spinner, error, result) and rejects the
//! transitions the design disallows, notably reset while loading.

use helprx_common::Analysis;
use thiserror::Error;

/// Which surface is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    Idle,
    Loading,
    Success,
    Error,
}

impl LoadingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingState::Idle => "idle",
            LoadingState::Loading => "loading",
            LoadingState::Success => "success",
            LoadingState::Error => "error",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("a request is already in flight")]
    AlreadyLoading,

    #[error("cannot {action} from the {from} state")]
    Invalid {
        action: &'static str,
        from: &'static str,
    },
}

/// Owner of the lifecycle and the latest result.
///
/// A new result fully replaces the previous one; a failure never leaves a
/// stale result behind.
#[derive(Debug, Default)]
pub struct Session {
    state: Option<SessionState>,
}

#[derive(Debug)]
enum SessionState {
    Loading,
    Success(Box<Analysis>),
    Error(String),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadingState {
        match &self.state {
            None => LoadingState::Idle,
            Some(SessionState::Loading) => LoadingState::Loading,
            Some(SessionState::Success(_)) => LoadingState::Success,
            Some(SessionState::Error(_)) => LoadingState::Error,
        }
    }

    pub fn result(&self) -> Option<&Analysis> {
        match &self.state {
            Some(SessionState::Success(analysis)) => Some(analysis),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            Some(SessionState::Error(message)) => Some(message),
            _ => None,
        }
    }

    /// Submit: only legal from Idle. The caller owns the single pending
    /// request for the duration of Loading.
    pub fn submit(&mut self) -> Result<(), TransitionError> {
        match self.state() {
            LoadingState::Idle => {
                self.state = Some(SessionState::Loading);
                Ok(())
            }
            LoadingState::Loading => Err(TransitionError::AlreadyLoading),
            from => Err(TransitionError::Invalid {
                action: "submit",
                from: from.as_str(),
            }),
        }
    }

    /// The pending request resolved.
    pub fn complete(&mut self, analysis: Analysis) -> Result<(), TransitionError> {
        match self.state() {
            LoadingState::Loading => {
                self.state = Some(SessionState::Success(Box::new(analysis)));
                Ok(())
            }
            from => Err(TransitionError::Invalid {
                action: "complete",
                from: from.as_str(),
            }),
        }
    }

    /// The pending request failed. The stale result, if any, is discarded.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), TransitionError> {
        match self.state() {
            LoadingState::Loading => {
                self.state = Some(SessionState::Error(message.into()));
                Ok(())
            }
            from => Err(TransitionError::Invalid {
                action: "fail",
                from: from.as_str(),
            }),
        }
    }

    /// Return to the input form. Only reachable from terminal states; an
    /// in-flight request cannot be reset out from under itself.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        match self.state() {
            LoadingState::Success | LoadingState::Error => {
                self.state = None;
                Ok(())
            }
            from => Err(TransitionError::Invalid {
                action: "reset",
                from: from.as_str(),
            }),
        }
    }
}
