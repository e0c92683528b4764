//! Debounced form-to-request orchestration.
//!
//! The orchestrator owns the conversion form. Every edit clears the
//! published result and restarts a quiet-period timer; when the timer
//! elapses with a valid form, exactly one conversion request is issued and
//! its result is published and appended to the session history.

use fxdesk_core::conversion::{Conversion, ConversionForm, ConversionGateway, ConversionRequest, FormChange};
use fxdesk_core::currency::Currency;
use fxdesk_core::fault::FaultHandler;
use fxdesk_core::history::ConversionHistory;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Quiet period used when none is configured.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Where the orchestrator is in its edit → wait → request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestratorState {
    /// Nothing pending. The last result may or may not be present.
    Idle,
    /// An edit happened; waiting out the quiet period.
    Debouncing,
    /// A conversion request is in flight.
    Pending,
    /// The request issued for the current form succeeded and was published.
    Settled,
}

struct Machine {
    form: ConversionForm,
    state: OrchestratorState,
    /// Bumped on every edit; a timer only acts if its generation is current.
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

struct Shared<G: ConversionGateway> {
    gateway: G,
    history: ConversionHistory,
    faults: Arc<dyn FaultHandler>,
    quiet_period: Duration,
    lifetime: CancellationToken,
    current: watch::Sender<Option<Conversion>>,
    currencies: RwLock<Vec<Currency>>,
    machine: Mutex<Machine>,
}

impl<G: ConversionGateway> Shared<G> {
    fn machine(&self) -> MutexGuard<'_, Machine> {
        self.machine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn report(&self, fault: &dyn Debug) {
        if let Err(err) = self.faults.handle_fault(fault) {
            tracing::error!("[Orchestrator] Fault reporter failed: {}", err);
        }
    }

    /// Claims the elapsed timer and returns the request to issue, if any.
    fn claim_submission(&self, generation: u64) -> Option<ConversionRequest> {
        let mut machine = self.machine();
        if machine.generation != generation || self.lifetime.is_cancelled() {
            return None;
        }
        // Detach from the timer slot: later edits must not abort this request.
        machine.timer = None;

        match machine.form.submission() {
            Some(request) => {
                machine.state = OrchestratorState::Pending;
                Some(request)
            }
            None => {
                tracing::debug!("[Orchestrator] Form incomplete, no request issued");
                machine.state = OrchestratorState::Idle;
                None
            }
        }
    }

    async fn dispatch(&self, request: ConversionRequest, generation: u64) {
        tracing::info!(
            "[Orchestrator] Converting {} {} -> {}",
            request.amount,
            request.from,
            request.to
        );

        let outcome = tokio::select! {
            _ = self.lifetime.cancelled() => return,
            outcome = self.gateway.convert(&request.from, &request.to, request.amount) => outcome,
        };
        if self.lifetime.is_cancelled() {
            return;
        }

        match outcome {
            Ok(conversion) => {
                // Last arrival wins: an older response may overwrite a newer one.
                self.current.send_replace(Some(conversion.clone()));
                self.history.append(conversion).await;

                let mut machine = self.machine();
                if machine.generation == generation {
                    machine.state = OrchestratorState::Settled;
                }
            }
            Err(err) => {
                tracing::warn!("[Orchestrator] Conversion failed: {}", err);
                {
                    let mut machine = self.machine();
                    if machine.generation == generation {
                        machine.state = OrchestratorState::Idle;
                    }
                }
                self.report(&err);
            }
        }
    }
}

/// Drives the conversion form.
///
/// Must be used from within a tokio runtime: edits spawn the quiet-period
/// timer. Dropping the orchestrator disposes it.
pub struct ConversionOrchestrator<G: ConversionGateway + 'static> {
    shared: Arc<Shared<G>>,
}

impl<G: ConversionGateway + 'static> ConversionOrchestrator<G> {
    /// Creates an orchestrator writing results into `history`.
    ///
    /// # Arguments
    ///
    /// * `gateway` - Backend client used for currencies and conversions
    /// * `history` - Session history shared with any history view
    /// * `faults` - Receives every failed request
    /// * `quiet_period` - Delay after the last edit before a request is issued
    pub fn new(
        gateway: G,
        history: ConversionHistory,
        faults: Arc<dyn FaultHandler>,
        quiet_period: Duration,
    ) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            shared: Arc::new(Shared {
                gateway,
                history,
                faults,
                quiet_period,
                lifetime: CancellationToken::new(),
                current,
                currencies: RwLock::new(Vec::new()),
                machine: Mutex::new(Machine {
                    form: ConversionForm::new(),
                    state: OrchestratorState::Idle,
                    generation: 0,
                    timer: None,
                }),
            }),
        }
    }

    /// Fetches the supported currencies once.
    ///
    /// Failures go to the fault handler. The returned handle completes when
    /// the list is stored (or the fetch failed or was cancelled).
    pub fn start(&self) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = shared.lifetime.cancelled() => return,
                outcome = shared.gateway.list_currencies() => outcome,
            };
            if shared.lifetime.is_cancelled() {
                return;
            }

            match outcome {
                Ok(currencies) => {
                    tracing::info!("[Orchestrator] Loaded {} currencies", currencies.len());
                    *shared
                        .currencies
                        .write()
                        .unwrap_or_else(PoisonError::into_inner) = currencies;
                }
                Err(err) => {
                    tracing::warn!("[Orchestrator] Failed to load currencies: {}", err);
                    shared.report(&err);
                }
            }
        })
    }

    /// Applies a form edit.
    ///
    /// The published result is cleared before this returns, any pending
    /// quiet-period timer is cancelled and a fresh one started. A request
    /// already in flight keeps running. Ignored after `dispose`.
    pub fn edit(&self, change: FormChange) {
        if self.shared.lifetime.is_cancelled() {
            return;
        }

        let mut machine = self.shared.machine();
        machine.form.apply(change);
        machine.generation += 1;
        if let Some(timer) = machine.timer.take() {
            timer.abort();
        }
        self.shared.current.send_replace(None);
        machine.state = OrchestratorState::Debouncing;

        let generation = machine.generation;
        let shared = Arc::clone(&self.shared);
        machine.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(shared.quiet_period).await;
            if let Some(request) = shared.claim_submission(generation) {
                shared.dispatch(request, generation).await;
            }
        }));
    }

    /// Cancels the pending timer and discards every outstanding response.
    pub fn dispose(&self) {
        self.shared.lifetime.cancel();
        let mut machine = self.shared.machine();
        if let Some(timer) = machine.timer.take() {
            timer.abort();
        }
        machine.state = OrchestratorState::Idle;
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.lifetime.is_cancelled()
    }

    /// Watches the published result.
    pub fn subscribe(&self) -> watch::Receiver<Option<Conversion>> {
        self.shared.current.subscribe()
    }

    /// The currently published result, if any.
    pub fn current(&self) -> Option<Conversion> {
        self.shared.current.borrow().clone()
    }

    pub fn state(&self) -> OrchestratorState {
        self.shared.machine().state
    }

    pub fn form(&self) -> ConversionForm {
        self.shared.machine().form.clone()
    }

    pub fn currencies(&self) -> Vec<Currency> {
        self.shared
            .currencies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.shared.history
    }

    pub fn quiet_period(&self) -> Duration {
        self.shared.quiet_period
    }
}

impl<G: ConversionGateway + 'static> Drop for ConversionOrchestrator<G> {
    fn drop(&mut self) {
        self.dispose();
    }
}
