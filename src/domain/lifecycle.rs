//! Loading / ready / failed state of the one market-data acquisition attempt.

use std::sync::Arc;

use strum::{AsRefStr, Display as StrumDisplay};

use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::market_data::Asset;

/// Discriminant the view switches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, AsRefStr)]
pub enum LifecycleStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleState {
    /// Before the first activation. Reported as `Loading`.
    Idle,
    Loading,
    Ready(Arc<Vec<Asset>>),
    Failed { message: String, cause: FetchError },
}

/// Identifies one activation. Results carrying an older token are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivationToken(u64);

impl ActivationToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchLifecycle {
    state: LifecycleState,
    generation: u64,
}

impl Default for FetchLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchLifecycle {
    pub fn new() -> Self {
        Self { state: LifecycleState::Idle, generation: 0 }
    }

    /// Enter `Loading`, dropping any previous data or error, and hand out
    /// the token the result must be resolved with.
    pub fn begin(&mut self) -> ActivationToken {
        self.generation += 1;
        self.state = LifecycleState::Loading;
        ActivationToken(self.generation)
    }

    /// Apply the outcome of the attempt identified by `token`.
    ///
    /// Returns `false` and leaves the state untouched when the token is stale
    /// or the attempt has already been resolved.
    pub fn resolve(&mut self, token: ActivationToken, outcome: FetchResult<Vec<Asset>>) -> bool {
        if token.0 != self.generation || !matches!(self.state, LifecycleState::Loading) {
            return false;
        }

        self.state = match outcome {
            Ok(assets) => LifecycleState::Ready(Arc::new(assets)),
            Err(cause) => LifecycleState::Failed { message: cause.user_message().to_string(), cause },
        };
        true
    }

    /// Invalidate every outstanding token without touching the state.
    pub fn retire(&mut self) {
        self.generation += 1;
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn status(&self) -> LifecycleStatus {
        match self.state {
            LifecycleState::Idle | LifecycleState::Loading => LifecycleStatus::Loading,
            LifecycleState::Ready(_) => LifecycleStatus::Ready,
            LifecycleState::Failed { .. } => LifecycleStatus::Failed,
        }
    }

    /// The fetched batch in provider order; empty unless `Ready`.
    pub fn assets(&self) -> &[Asset] {
        match &self.state {
            LifecycleState::Ready(assets) => assets.as_slice(),
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LifecycleState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn failure_cause(&self) -> Option<&FetchError> {
        match &self.state {
            LifecycleState::Failed { cause, .. } => Some(cause),
            _ => None,
        }
    }
}
