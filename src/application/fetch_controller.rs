use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use leptos::{RwSignal, SignalUpdate};

use crate::domain::{
    lifecycle::FetchLifecycle,
    logging::LogComponent,
    market_data::MarketDataSource,
};
use crate::{log_debug, log_error, log_info, log_warn};

/// Where the controller keeps its [`FetchLifecycle`].
pub trait LifecycleStore {
    /// Run `f` against the lifecycle. `None` once the store stopped accepting
    /// writes, e.g. a signal disposed together with its view.
    fn try_modify<R>(&self, f: impl FnOnce(&mut FetchLifecycle) -> R) -> Option<R>;
}

impl LifecycleStore for RwSignal<FetchLifecycle> {
    fn try_modify<R>(&self, f: impl FnOnce(&mut FetchLifecycle) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl LifecycleStore for Rc<RefCell<FetchLifecycle>> {
    fn try_modify<R>(&self, f: impl FnOnce(&mut FetchLifecycle) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut lifecycle| f(&mut lifecycle))
    }
}

/// How an activation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Lifecycle reached `Ready` with this many assets
    Ready(usize),
    /// Lifecycle reached `Failed`
    Failed,
    /// Result arrived for an activation that is no longer current and was dropped
    Discarded,
}

/// Drives one [`FetchLifecycle`] through `Loading -> Ready | Failed`.
///
/// Errors from the source never escape: they end up as lifecycle state.
pub struct FetchLifecycleController<S, L> {
    source: S,
    store: L,
    in_flight: RefCell<Option<AbortHandle>>,
}

impl<S, L> FetchLifecycleController<S, L>
where
    S: MarketDataSource,
    L: LifecycleStore,
{
    pub fn new(source: S, store: L) -> Self {
        Self { source, store, in_flight: RefCell::new(None) }
    }

    /// Enter `Loading`, make exactly one request and store its outcome,
    /// unless [`deactivate`](Self::deactivate) ran in the meantime.
    pub async fn activate(&self) -> ActivationOutcome {
        let Some(token) = self.store.try_modify(FetchLifecycle::begin) else {
            log_warn!(
                LogComponent::Application("FetchLifecycle"),
                "lifecycle store gone before activation"
            );
            return ActivationOutcome::Discarded;
        };
        log_info!(
            LogComponent::Application("FetchLifecycle"),
            "🚀 Activation #{} loading top assets",
            token.generation()
        );

        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.in_flight.replace(Some(handle)) {
            previous.abort();
        }

        let outcome = match Abortable::new(self.source.fetch_top_assets(), registration).await {
            Ok(outcome) => outcome,
            Err(_aborted) => {
                log_debug!(
                    LogComponent::Application("FetchLifecycle"),
                    "activation #{} aborted",
                    token.generation()
                );
                return ActivationOutcome::Discarded;
            }
        };

        let summary = match &outcome {
            Ok(assets) => ActivationOutcome::Ready(assets.len()),
            Err(cause) => {
                log_error!(
                    LogComponent::Application("FetchLifecycle"),
                    "❌ Activation #{} failed: {}",
                    token.generation(),
                    cause
                );
                ActivationOutcome::Failed
            }
        };

        match self.store.try_modify(|lifecycle| lifecycle.resolve(token, outcome)) {
            Some(true) => {
                log_debug!(
                    LogComponent::Application("FetchLifecycle"),
                    "activation #{} resolved: {:?}",
                    token.generation(),
                    summary
                );
                summary
            }
            _ => {
                log_warn!(
                    LogComponent::Application("FetchLifecycle"),
                    "stale completion of activation #{} discarded",
                    token.generation()
                );
                ActivationOutcome::Discarded
            }
        }
    }

    /// Detach from the current activation: abort the request in flight and
    /// make sure a late result can no longer be applied.
    pub fn deactivate(&self) {
        if let Some(handle) = self.in_flight.borrow_mut().take() {
            handle.abort();
        }
        self.store.try_modify(FetchLifecycle::retire);
    }
}
