//! Fetch-and-derive pipeline: selection → request key → cancellable fetch → chart records.
//!
//! Runs on the single-threaded browser event loop. Every issued request
//! captures the generation it was issued under; a completion only mutates
//! state if that generation is still current and the pipeline has not been
//! shut down. Newer selections win regardless of response arrival order.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::domain::{
    errors::NetworkResult,
    logging::LogComponent,
    market_data::{
        AlignmentPolicy, ChartRecord, MarketChartSource, RawSeriesResponse, RequestKey, Selection,
        derive_chart_records,
    },
    state::{FetchState, PipelinePhase},
};
use crate::{log_debug, log_error, log_info, log_trace, log_warn};

/// How a single request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Payload stored and records derived
    Applied,
    /// Error recorded, prior data kept
    Failed,
    /// Superseded or torn down; no observable effect
    Stale,
}

/// Future driving one request to completion. Spawn it on the local executor.
pub type PendingFetch = LocalBoxFuture<'static, FetchOutcome>;

/// Result of `FetchPipeline::resolve`
pub struct Resolution {
    pub records: Rc<Vec<ChartRecord>>,
    pub loading: bool,
    /// `None` when the selection maps to the request already issued
    pub pending: Option<PendingFetch>,
}

struct Ticket {
    generation: u64,
    key: RequestKey,
}

#[derive(Default)]
struct PipelineCore {
    generation: u64,
    active_key: Option<RequestKey>,
    shut_down: bool,
    state: FetchState,
}

type Listener = Rc<dyn Fn(&FetchState)>;

struct Shared {
    core: RefCell<PipelineCore>,
    listeners: RefCell<Vec<Listener>>,
    policy: AlignmentPolicy,
}

impl Shared {
    /// Listeners run with no borrow held, so they may call back into the pipeline
    /// or subscribe further listeners; those join from the next transition.
    fn notify(&self) {
        let snapshot = self.core.borrow().state.clone();
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn is_current(&self, ticket: &Ticket) -> bool {
        let core = self.core.borrow();
        !core.shut_down && core.generation == ticket.generation
    }

    fn commit(&self, ticket: Ticket, result: NetworkResult<RawSeriesResponse>) -> FetchOutcome {
        if !self.is_current(&ticket) {
            log_debug!(
                LogComponent::Application("FetchPipeline"),
                "🗑️ Discarding stale response for {} (generation {})",
                ticket.key,
                ticket.generation
            );
            return FetchOutcome::Stale;
        }

        let derived = result.and_then(|raw| {
            derive_chart_records(&raw, self.policy).map(|records| (raw, records))
        });

        let outcome = {
            let mut core = self.core.borrow_mut();
            let state = &mut core.state;
            state.loading = false;
            match derived {
                Ok((raw, records)) => {
                    log_info!(
                        LogComponent::Application("FetchPipeline"),
                        "✅ Derived {} records for {}",
                        records.len(),
                        ticket.key
                    );
                    state.data = Some(Rc::new(raw));
                    state.source = Some(ticket.key);
                    state.records = Rc::new(records);
                    state.error = None;
                    state.phase = PipelinePhase::Ready;
                    FetchOutcome::Applied
                }
                Err(err) => {
                    log_error!(
                        LogComponent::Application("FetchPipeline"),
                        "❌ {} failed ({}): {}",
                        ticket.key,
                        err.kind(),
                        err
                    );
                    state.phase =
                        if state.has_data() { PipelinePhase::Ready } else { PipelinePhase::Idle };
                    state.error = Some(err);
                    FetchOutcome::Failed
                }
            }
        };

        self.notify();
        outcome
    }
}

/// One pipeline per dashboard. Dropping it marks in-flight requests stale.
pub struct FetchPipeline<S: MarketChartSource> {
    source: S,
    shared: Rc<Shared>,
}

impl<S: MarketChartSource> FetchPipeline<S> {
    pub fn new(source: S, policy: AlignmentPolicy) -> Self {
        Self {
            source,
            shared: Rc::new(Shared {
                core: RefCell::new(PipelineCore::default()),
                listeners: RefCell::new(Vec::new()),
                policy,
            }),
        }
    }

    /// Called with a snapshot after every state transition.
    pub fn subscribe(&self, listener: impl Fn(&FetchState) + 'static) {
        self.shared.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Map a selection to records, issuing a request only when its key changed.
    pub fn resolve(&self, selection: &Selection) -> Resolution {
        let key = selection.request_key();
        let ticket = {
            let mut core = self.shared.core.borrow_mut();
            if core.shut_down {
                log_warn!(
                    LogComponent::Application("FetchPipeline"),
                    "⚠️ resolve({}) after shutdown ignored",
                    key
                );
                return Self::current(&core.state, None);
            }
            if core.active_key.as_ref() == Some(&key) {
                log_trace!(LogComponent::Application("FetchPipeline"), "{} unchanged", key);
                return Self::current(&core.state, None);
            }

            core.generation += 1;
            core.active_key = Some(key.clone());
            core.state.loading = true;
            core.state.error = None;
            core.state.phase = PipelinePhase::Loading;
            Ticket { generation: core.generation, key }
        };

        log_info!(
            LogComponent::Application("FetchPipeline"),
            "📡 Requesting {} (generation {})",
            ticket.key,
            ticket.generation
        );
        self.shared.notify();

        let request = self.source.fetch_market_chart(&ticket.key);
        let shared: Weak<Shared> = Rc::downgrade(&self.shared);
        let pending = async move {
            let result = request.await;
            match shared.upgrade() {
                Some(shared) => shared.commit(ticket, result),
                None => FetchOutcome::Stale,
            }
        }
        .boxed_local();

        Self::current(&self.shared.core.borrow().state, Some(pending))
    }

    /// Teardown: every in-flight completion becomes a no-op.
    pub fn shutdown(&self) {
        let mut core = self.shared.core.borrow_mut();
        if !core.shut_down {
            core.shut_down = true;
            core.generation += 1;
            log_debug!(LogComponent::Application("FetchPipeline"), "🛑 Pipeline shut down");
        }
    }

    pub fn state(&self) -> FetchState {
        self.shared.core.borrow().state.clone()
    }

    pub fn records(&self) -> Rc<Vec<ChartRecord>> {
        Rc::clone(&self.shared.core.borrow().state.records)
    }

    pub fn is_loading(&self) -> bool {
        self.shared.core.borrow().state.loading
    }

    pub fn phase(&self) -> PipelinePhase {
        self.shared.core.borrow().state.phase
    }

    fn current(state: &FetchState, pending: Option<PendingFetch>) -> Resolution {
        Resolution { records: Rc::clone(&state.records), loading: state.loading, pending }
    }
}

impl<S: MarketChartSource> Drop for FetchPipeline<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
