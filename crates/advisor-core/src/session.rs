//! One-submission-at-a-time state machine.
//!
//! The guard lives here rather than at the presentation boundary: a second
//! submission while one is in flight is rejected, and a resolution arriving
//! when nothing is in flight is dropped.

use thiserror::Error;

use crate::assessment::Assessment;
use crate::setup::{SetupError, SimulationSetup};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error(transparent)]
    Setup(#[from] SetupError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Submitting,
    Success(Assessment),
    Failed(String),
}

/// Session-scoped state: the mutable setup plus the submission lifecycle.
///
/// Nothing here is persisted; the session lives exactly as long as the
/// surrounding application run.
#[derive(Debug, Default)]
pub struct AdvisorSession {
    pub setup: SimulationSetup,
    state: SessionState,
}

impl AdvisorSession {
    pub fn new(setup: SimulationSetup) -> Self {
        Self {
            setup,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        match &self.state {
            SessionState::Success(assessment) => Some(assessment),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Validate the setup and enter `Submitting`, discarding any stale
    /// result or error. Fails without a state change if a submission is
    /// already in flight or the setup is incomplete.
    pub fn begin_submission(&mut self) -> Result<(), SessionError> {
        if matches!(self.state, SessionState::Submitting) {
            return Err(SessionError::AlreadySubmitting);
        }
        self.setup.validate()?;
        self.state = SessionState::Submitting;
        Ok(())
    }

    /// Record the outcome of the in-flight submission. A resolution with no
    /// submission in flight (e.g. a response arriving after a timeout
    /// already failed the session) is logged and dropped.
    pub fn resolve(&mut self, outcome: Result<Assessment, String>) {
        if !matches!(self.state, SessionState::Submitting) {
            log::warn!("dropping resolution: no submission in flight");
            return;
        }
        self.state = match outcome {
            Ok(assessment) => SessionState::Success(assessment),
            Err(reason) => SessionState::Failed(reason),
        };
    }
}
